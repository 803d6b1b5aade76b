use super::renumber::auto_renumber_priorities;
use super::types::{RankableItem, RankingError, RenumberConfig};

/// Promote `id` to the end of the featured band.
///
/// The collection is renumbered before and after the promotion, so the
/// result has contiguous bands regardless of the input.
pub fn feature_item(
    items: &[RankableItem],
    id: &str,
    config: &RenumberConfig,
) -> Result<Vec<RankableItem>, RankingError> {
    let target = find(items, id)?;
    if target.featured {
        return Err(RankingError::AlreadyFeatured(id.to_string()));
    }

    let capacity = config.featured_capacity();
    let featured_count = items.iter().filter(|item| item.featured).count();
    if featured_count >= capacity {
        return Err(RankingError::BandFull { capacity });
    }

    let mut renumbered = auto_renumber_priorities(items, config);
    let tail = config.featured_start + featured_count as i64;
    for item in renumbered.iter_mut().filter(|item| item.id == id) {
        item.featured = true;
        item.priority = tail;
    }

    Ok(auto_renumber_priorities(&renumbered, config))
}

/// Demote `id` into the non-featured band at its alphabetical position.
pub fn unfeature_item(
    items: &[RankableItem],
    id: &str,
    config: &RenumberConfig,
) -> Result<Vec<RankableItem>, RankingError> {
    let target = find(items, id)?;
    if !target.featured {
        return Err(RankingError::NotFeatured(id.to_string()));
    }

    let demoted: Vec<RankableItem> = items
        .iter()
        .map(|item| {
            let mut item = item.clone();
            if item.id == id {
                item.featured = false;
            }
            item
        })
        .collect();

    Ok(auto_renumber_priorities(&demoted, config))
}

fn find<'a>(items: &'a [RankableItem], id: &str) -> Result<&'a RankableItem, RankingError> {
    items
        .iter()
        .find(|item| item.id == id)
        .ok_or_else(|| RankingError::NotFound(id.to_string()))
}
