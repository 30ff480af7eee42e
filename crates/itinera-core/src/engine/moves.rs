//! The move algorithm shared by every reorder entry point.

use super::SkipReason;
use crate::{
    models::{Itinerary, ItineraryItem},
    params::{MoveItem, MoveTarget},
};

/// Moves one item as described by `request`.
///
/// The target index is the item's final position in the target list, so a
/// same-day move is a plain remove-then-insert. Every check happens before
/// the first mutation: on `Err` the itinerary is untouched.
pub(crate) fn apply_move(
    itinerary: &mut Itinerary,
    request: &MoveItem,
) -> Result<ItineraryItem, SkipReason> {
    let source = itinerary
        .bucket_index(request.source_date)
        .ok_or(SkipReason::BucketNotFound {
            date: request.source_date,
        })?;
    let target = itinerary
        .bucket_index(request.target_date)
        .ok_or(SkipReason::BucketNotFound {
            date: request.target_date,
        })?;

    let source_len = itinerary[source].len();
    if request.source_index >= source_len {
        return Err(SkipReason::SourceIndexOutOfRange {
            date: request.source_date,
            index: request.source_index,
            len: source_len,
        });
    }

    let same_day = source == target;
    // Length of the target list once the moving item has left it
    let target_len = if same_day {
        source_len - 1
    } else {
        itinerary[target].len()
    };

    let insert_at = match &request.target {
        MoveTarget::End => target_len,
        MoveTarget::Index(index) => (*index).min(target_len),
        MoveTarget::Before(anchor) => {
            if *anchor == itinerary[source].details[request.source_index].id {
                return Err(SkipReason::NoChange);
            }
            let position = itinerary[target]
                .position_of(anchor)
                .ok_or_else(|| SkipReason::ItemNotFound { id: anchor.clone() })?;
            if same_day && request.source_index < position {
                position - 1
            } else {
                position
            }
        }
    };

    if same_day && insert_at == request.source_index {
        return Err(SkipReason::NoChange);
    }

    let mut item = itinerary[source].details.remove(request.source_index);
    item.date = itinerary[target].date;
    itinerary[target].details.insert(insert_at, item.clone());

    Ok(item)
}

#[cfg(test)]
mod tests {
    use jiff::civil::{Date, date};

    use super::*;
    use crate::models::ItemKind;

    fn item(id: &str, day: Date) -> ItineraryItem {
        ItineraryItem {
            id: id.to_string(),
            title: id.to_uppercase(),
            date: day,
            location: String::new(),
            kind: ItemKind::Other,
            notes: None,
        }
    }

    /// Three days; day two holds `a`, `b`, `c`.
    fn fixture() -> Itinerary {
        let mut itinerary = Itinerary::from_range(date(2025, 1, 1), date(2025, 1, 3));
        for id in ["a", "b", "c"] {
            itinerary[1].details.push(item(id, date(2025, 1, 2)));
        }
        itinerary
    }

    fn ids(itinerary: &Itinerary, bucket: usize) -> Vec<&str> {
        itinerary[bucket]
            .details
            .iter()
            .map(|i| i.id.as_str())
            .collect()
    }

    fn movement(from: (i8, usize), to: i8, target: MoveTarget) -> MoveItem {
        MoveItem {
            source_date: date(2025, 1, from.0),
            source_index: from.1,
            target_date: date(2025, 1, to),
            target,
        }
    }

    #[test]
    fn test_same_day_forward_lands_at_final_index() {
        let mut itinerary = fixture();
        apply_move(&mut itinerary, &movement((2, 0), 2, MoveTarget::Index(2))).unwrap();
        assert_eq!(ids(&itinerary, 1), ["b", "c", "a"]);
    }

    #[test]
    fn test_same_day_backward() {
        let mut itinerary = fixture();
        apply_move(&mut itinerary, &movement((2, 2), 2, MoveTarget::Index(0))).unwrap();
        assert_eq!(ids(&itinerary, 1), ["c", "a", "b"]);
    }

    #[test]
    fn test_same_day_adjacent_swap() {
        let mut itinerary = fixture();
        apply_move(&mut itinerary, &movement((2, 0), 2, MoveTarget::Index(1))).unwrap();
        assert_eq!(ids(&itinerary, 1), ["b", "a", "c"]);
    }

    #[test]
    fn test_same_position_is_no_change() {
        let mut itinerary = fixture();
        let before = itinerary.clone();
        assert_eq!(
            apply_move(&mut itinerary, &movement((2, 1), 2, MoveTarget::Index(1))),
            Err(SkipReason::NoChange)
        );
        assert_eq!(
            apply_move(&mut itinerary, &movement((2, 2), 2, MoveTarget::End)),
            Err(SkipReason::NoChange)
        );
        assert_eq!(itinerary, before);
    }

    #[test]
    fn test_cross_day_into_empty_bucket_appends() {
        let mut itinerary = fixture();
        let moved =
            apply_move(&mut itinerary, &movement((2, 1), 3, MoveTarget::Index(7))).unwrap();
        assert_eq!(moved.date, date(2025, 1, 3));
        assert_eq!(ids(&itinerary, 1), ["a", "c"]);
        assert_eq!(ids(&itinerary, 2), ["b"]);
        assert!(itinerary.is_consistent());
    }

    #[test]
    fn test_cross_day_positional_insert() {
        let mut itinerary = fixture();
        itinerary[0].details.push(item("x", date(2025, 1, 1)));
        apply_move(&mut itinerary, &movement((1, 0), 2, MoveTarget::Index(1))).unwrap();
        assert_eq!(ids(&itinerary, 1), ["a", "x", "b", "c"]);
        assert!(itinerary[0].is_empty());
        assert_eq!(itinerary[1].details[1].date, date(2025, 1, 2));
    }

    #[test]
    fn test_index_past_end_clamps_to_append() {
        let mut itinerary = fixture();
        apply_move(&mut itinerary, &movement((2, 0), 2, MoveTarget::Index(99))).unwrap();
        assert_eq!(ids(&itinerary, 1), ["b", "c", "a"]);
    }

    #[test]
    fn test_before_anchor_same_day() {
        let mut itinerary = fixture();
        apply_move(
            &mut itinerary,
            &movement((2, 0), 2, MoveTarget::Before("c".into())),
        )
        .unwrap();
        assert_eq!(ids(&itinerary, 1), ["b", "a", "c"]);

        apply_move(
            &mut itinerary,
            &movement((2, 2), 2, MoveTarget::Before("b".into())),
        )
        .unwrap();
        assert_eq!(ids(&itinerary, 1), ["c", "b", "a"]);
    }

    #[test]
    fn test_before_anchor_already_in_place_is_no_change() {
        let mut itinerary = fixture();
        assert_eq!(
            apply_move(
                &mut itinerary,
                &movement((2, 0), 2, MoveTarget::Before("b".into()))
            ),
            Err(SkipReason::NoChange)
        );
        assert_eq!(
            apply_move(
                &mut itinerary,
                &movement((2, 0), 2, MoveTarget::Before("a".into()))
            ),
            Err(SkipReason::NoChange)
        );
    }

    #[test]
    fn test_before_anchor_cross_day() {
        let mut itinerary = fixture();
        itinerary[2].details.push(item("y", date(2025, 1, 3)));
        apply_move(
            &mut itinerary,
            &movement((2, 1), 3, MoveTarget::Before("y".into())),
        )
        .unwrap();
        assert_eq!(ids(&itinerary, 2), ["b", "y"]);
    }

    #[test]
    fn test_missing_anchor_leaves_itinerary_untouched() {
        let mut itinerary = fixture();
        let before = itinerary.clone();
        assert_eq!(
            apply_move(
                &mut itinerary,
                &movement((2, 0), 3, MoveTarget::Before("ghost".into()))
            ),
            Err(SkipReason::ItemNotFound { id: "ghost".into() })
        );
        assert_eq!(itinerary, before);
    }

    #[test]
    fn test_invalid_source_or_target_is_skipped() {
        let mut itinerary = fixture();
        let before = itinerary.clone();

        assert!(matches!(
            apply_move(&mut itinerary, &movement((2, 3), 2, MoveTarget::End)),
            Err(SkipReason::SourceIndexOutOfRange { index: 3, len: 3, .. })
        ));
        assert_eq!(
            apply_move(&mut itinerary, &movement((2, 0), 9, MoveTarget::End)),
            Err(SkipReason::BucketNotFound {
                date: date(2025, 1, 9)
            })
        );
        assert_eq!(
            apply_move(&mut itinerary, &movement((8, 0), 2, MoveTarget::End)),
            Err(SkipReason::BucketNotFound {
                date: date(2025, 1, 8)
            })
        );
        assert_eq!(itinerary, before);
    }

    #[test]
    fn test_round_trip_restores_original_order() {
        let mut itinerary = fixture();
        let original = itinerary.clone();

        apply_move(&mut itinerary, &movement((2, 1), 1, MoveTarget::End)).unwrap();
        apply_move(&mut itinerary, &movement((1, 0), 2, MoveTarget::Index(1))).unwrap();

        assert_eq!(itinerary, original);
    }
}
