use super::error::{LiturgyError, LiturgyResult};
use super::types::RawEvent;

/// Picks the principal event of a day.
///
/// The event with the highest rank precedence wins. On ties the earliest
/// event in bucket order is kept, so the result depends on generator order.
pub fn principal_event(events: &[RawEvent]) -> LiturgyResult<&RawEvent> {
    let (first, rest) = events.split_first().ok_or(LiturgyError::EmptyDay)?;

    Ok(rest.iter().fold(first, |best, candidate| {
        if candidate.rank.precedence() > best.rank.precedence() {
            candidate
        } else {
            best
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::liturgy::Rank;
    use chrono::NaiveDate;

    fn event(id: &str, rank: Rank) -> RawEvent {
        let date = NaiveDate::from_ymd_opt(2025, 3, 19).unwrap();
        RawEvent::new(date, id, id, rank)
    }

    #[test]
    fn test_highest_rank_wins() {
        let events = vec![
            event("lent_weekday", Rank::Weekday),
            event("memorial", Rank::Memorial),
            event("joseph", Rank::Solemnity),
            event("feast", Rank::Feast),
        ];

        assert_eq!(principal_event(&events).unwrap().id, "joseph");
    }

    #[test]
    fn test_tie_keeps_first_event() {
        let events = vec![
            event("advent_2_sunday", Rank::Sunday),
            event("immaculate_conception", Rank::Solemnity),
        ];

        assert_eq!(principal_event(&events).unwrap().id, "advent_2_sunday");
    }

    #[test]
    fn test_unknown_rank_loses_to_weekday() {
        let events = vec![
            event("unknown", Rank::Other("COMMEMORATION".to_string())),
            event("weekday", Rank::Weekday),
        ];

        assert_eq!(principal_event(&events).unwrap().id, "weekday");
    }

    #[test]
    fn test_single_event_is_principal() {
        let events = vec![event("only", Rank::Other("TRIDUUM".to_string()))];
        assert_eq!(principal_event(&events).unwrap().id, "only");
    }

    #[test]
    fn test_empty_bucket_is_rejected() {
        assert_eq!(principal_event(&[]), Err(LiturgyError::EmptyDay));
    }

    #[test]
    fn test_principal_dominates_every_event() {
        let ranks = [
            Rank::Feria,
            Rank::Memorial,
            Rank::Weekday,
            Rank::Feast,
            Rank::Other("X".to_string()),
            Rank::Sunday,
            Rank::Solemnity,
            Rank::Memorial,
        ];
        // Every prefix of the list is a valid bucket
        for len in 1..=ranks.len() {
            let events: Vec<_> = ranks[..len]
                .iter()
                .enumerate()
                .map(|(i, rank)| event(&format!("e{i}"), rank.clone()))
                .collect();
            let principal = principal_event(&events).unwrap();
            let best = principal.rank.precedence();

            assert!(events.iter().all(|e| e.rank.precedence() <= best));
            let first_best = events.iter().find(|e| e.rank.precedence() == best).unwrap();
            assert_eq!(principal.id, first_best.id);
        }
    }
}
