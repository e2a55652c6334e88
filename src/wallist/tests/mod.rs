//! Test fixtures for wallist parsing
//!
//! Wallist samples shaped like the plain-text block on an EGD tournament card.


/// Small McMahon wallist with a header comment, a PIN-less player and a
/// player who skipped every round
pub fn create_test_wallist() -> String {
    r#"; CL[A]
; EV[Example Open 2023]
; PC[FR, Paris]
; DT[2023-01-01,2023-01-02]
; HA[h9]
; KM[7.5]
; TM[60]
; CM[]
;
; Pl Name                Rk Co Club  1      2      3      MMS SOS
  1 Smith John          3d FR Pari  2+/w1  3+/b1  4+/w   4   12 |13600542
  2 Dupont Marie        1d FR Lyon  1-/b1  4+/w2  3+/b   3   10 |10950171
  3 Novak Petr          2k CZ Prah  4+/b2  1-/w1  2-/w   2   11
  4 Leroy Paul          5k FR Pari  3-/w2  2-/b2  1-/b   1   13 |15030020
  5 Martin Anne         8k BE Brux  0=     0=     0=     0   0
"#
    .to_string()
}

/// Build a record literal without going through the parser
pub fn record(place: &str, last: &str, first: &str, games: &[&str]) -> crate::models::PlayerRecord {
    crate::models::PlayerRecord {
        identifier: None,
        place: place.to_string(),
        last_name: last.to_string(),
        first_name: first.to_string(),
        rank: "1d".to_string(),
        country: "FR".to_string(),
        club: "Pari".to_string(),
        games: games.iter().map(|g| g.to_string()).collect(),
        rating: String::new(),
    }
}
