use super::types::{Direction, RankableItem, RankingError};

/// Swap the priority of the item at `index` with the one above it.
///
/// `items` is expected to be one partition sorted by ascending priority.
/// Index `0` or an index past the end returns the input unchanged.
pub fn move_item_up(items: &[RankableItem], index: usize) -> Vec<RankableItem> {
    if index == 0 || index >= items.len() {
        return items.to_vec();
    }
    swap_priorities(items, index - 1, index)
}

/// Swap the priority of the item at `index` with the one below it.
///
/// The last index (or anything beyond it) returns the input unchanged.
pub fn move_item_down(items: &[RankableItem], index: usize) -> Vec<RankableItem> {
    if index >= items.len().saturating_sub(1) {
        return items.to_vec();
    }
    swap_priorities(items, index, index + 1)
}

fn swap_priorities(items: &[RankableItem], a: usize, b: usize) -> Vec<RankableItem> {
    let mut result = items.to_vec();
    let priority_a = result[a].priority;
    result[a].priority = result[b].priority;
    result[b].priority = priority_a;
    result
}

/// Featured subset of `items`, sorted by ascending priority.
///
/// The sort is stable so items sharing a priority keep their input order.
pub fn featured_in_order(items: &[RankableItem]) -> Vec<RankableItem> {
    let mut featured: Vec<RankableItem> = items.iter().filter(|i| i.featured).cloned().collect();
    featured.sort_by_key(|item| item.priority);
    featured
}

/// Move the featured item `id` one rank in `direction` within the full collection.
///
/// Moves past either end of the featured band leave the collection unchanged.
pub fn reorder_featured(
    items: &[RankableItem],
    id: &str,
    direction: Direction,
) -> Result<Vec<RankableItem>, RankingError> {
    let target = items
        .iter()
        .find(|item| item.id == id)
        .ok_or_else(|| RankingError::NotFound(id.to_string()))?;

    if !target.featured {
        return Err(RankingError::NotFeatured(id.to_string()));
    }

    let featured = featured_in_order(items);
    let index = featured
        .iter()
        .position(|item| item.id == id)
        .ok_or_else(|| RankingError::NotFound(id.to_string()))?;

    let moved = match direction {
        Direction::Up => move_item_up(&featured, index),
        Direction::Down => move_item_down(&featured, index),
    };

    Ok(items
        .iter()
        .map(|item| {
            moved
                .iter()
                .find(|m| m.id == item.id)
                .cloned()
                .unwrap_or_else(|| item.clone())
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, featured: bool, priority: i64) -> RankableItem {
        RankableItem::new(id, id, featured, priority)
    }

    fn three() -> Vec<RankableItem> {
        vec![item("a", true, 1), item("b", true, 2), item("c", true, 3)]
    }

    // ============================================================================
    // move_item_up / move_item_down
    // ============================================================================

    #[test]
    fn test_move_up_at_zero_is_noop() {
        let items = three();
        assert_eq!(move_item_up(&items, 0), items);
    }

    #[test]
    fn test_move_down_at_last_is_noop() {
        let items = three();
        assert_eq!(move_item_down(&items, items.len() - 1), items);
    }

    #[test]
    fn test_out_of_range_index_is_noop() {
        let items = three();
        assert_eq!(move_item_up(&items, 7), items);
        assert_eq!(move_item_down(&items, 7), items);
        assert!(move_item_down(&[], 0).is_empty());
    }

    #[test]
    fn test_max_index_is_noop() {
        let items = three();
        assert_eq!(move_item_up(&items, usize::MAX), items);
        assert_eq!(move_item_down(&items, usize::MAX), items);
    }

    #[test]
    fn test_move_up_swaps_priorities() {
        let items = vec![item("a", true, 2), item("b", true, 5), item("c", true, 9)];
        let result = move_item_up(&items, 1);

        assert_eq!(result[0].id, "a");
        assert_eq!(result[0].priority, 5);
        assert_eq!(result[1].id, "b");
        assert_eq!(result[1].priority, 2);
        assert_eq!(result[2], items[2]);
    }

    #[test]
    fn test_move_down_swaps_priorities() {
        let items = vec![item("a", true, 1), item("b", true, 2)];
        let result = move_item_down(&items, 0);

        assert_eq!(result, vec![item("a", true, 2), item("b", true, 1)]);

        let mut resorted = result.clone();
        resorted.sort_by_key(|i| i.priority);
        assert_eq!(resorted[0].id, "b");
    }

    #[test]
    fn test_move_keeps_existing_gaps() {
        let items = vec![item("a", true, 1), item("b", true, 4)];
        let result = move_item_up(&items, 1);

        assert_eq!(result[0].priority, 4);
        assert_eq!(result[1].priority, 1);
    }

    #[test]
    fn test_move_does_not_mutate_input() {
        let items = three();
        let before = items.clone();
        let _ = move_item_up(&items, 2);
        let _ = move_item_down(&items, 0);
        assert_eq!(items, before);
    }

    // ============================================================================
    // reorder_featured
    // ============================================================================

    #[test]
    fn test_featured_in_order_filters_and_sorts() {
        let items = vec![
            item("c", true, 3),
            item("x", false, 8),
            item("a", true, 1),
            item("b", true, 2),
        ];
        let ids: Vec<String> = featured_in_order(&items).into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_reorder_featured_moves_within_full_collection() {
        let items = vec![
            item("x", false, 8),
            item("b", true, 2),
            item("a", true, 1),
        ];
        let result = reorder_featured(&items, "b", Direction::Up).unwrap();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0], item("x", false, 8));
        assert_eq!(result[1], item("b", true, 1));
        assert_eq!(result[2], item("a", true, 2));
    }

    #[test]
    fn test_reorder_featured_at_edge_is_noop() {
        let items = three();
        assert_eq!(reorder_featured(&items, "a", Direction::Up).unwrap(), items);
        assert_eq!(reorder_featured(&items, "c", Direction::Down).unwrap(), items);
    }

    #[test]
    fn test_reorder_featured_unknown_id() {
        let err = reorder_featured(&three(), "zzz", Direction::Down).unwrap_err();
        assert_eq!(err, RankingError::NotFound("zzz".to_string()));
    }

    #[test]
    fn test_reorder_featured_rejects_non_featured() {
        let items = vec![item("a", true, 1), item("x", false, 8)];
        let err = reorder_featured(&items, "x", Direction::Up).unwrap_err();
        assert_eq!(err, RankingError::NotFeatured("x".to_string()));
    }
}
