use alloc::vec::Vec;

use crate::*;

/// Builds a fresh board: draws category ids, then fetches and samples every category in turn.
///
/// Categories land in the order their ids were drawn. The first failure aborts the whole setup and
/// nothing of the partially fetched board is returned.
pub async fn setup_game<A: TriviaApi>(
    provider: &mut ClueProvider<A>,
) -> core::result::Result<Board, SetupFailed> {
    let config = provider.config();
    let ids = provider
        .fetch_random_category_ids(config.categories_per_game)
        .await
        .inspect_err(|err| log::warn!("could not draw categories: {}", err))?;
    log::debug!("drew categories: {:?}", ids);

    let mut categories = Vec::with_capacity(ids.len());
    for id in ids {
        let category = provider
            .fetch_category(id)
            .await
            .inspect_err(|err| log::warn!("could not fetch category {}: {}", id, err))?;
        categories.push(category);
    }

    Ok(Board::new(categories, &config)?)
}
