//! Ordering of a collection into rarity tiers.

use serde::Serialize;

use crate::collection::Nft;
use crate::error::Result;

/// A maximal run of records sharing one `distribution` value.
///
/// Serializes as the bare record list so templates iterate groups directly.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct Group {
    #[serde(skip)]
    pub distribution: u64,
    pub nfts: Vec<Nft>,
}

/// Sums `distribution` across the collection.
///
/// A zero sum would make every scarcity ratio a division by zero, so it is
/// rejected here, before any per-record arithmetic runs.
pub fn total_distribution(nfts: &[Nft]) -> Result<u64> {
    let mut total = 0u64;
    for nft in nfts {
        total += nft.distribution_count()?;
    }

    if total == 0 {
        return err! {
            "zero total distribution",
            "records" => nfts.len(),
        };
    }

    Ok(total)
}

/// Sorts records by ascending `distribution` and partitions the result into
/// contiguous runs of equal value.
///
/// The sort is stable, so records sharing a tier keep their document order
/// within the group.
pub fn group_by_distribution(nfts: Vec<Nft>) -> Result<Vec<Group>> {
    let mut keyed = nfts.into_iter()
        .map(|nft| Ok((nft.distribution_count()?, nft)))
        .collect::<Result<Vec<_>>>()?;

    keyed.sort_by_key(|&(count, _)| count);

    let mut groups: Vec<Group> = Vec::new();
    for (count, nft) in keyed {
        match groups.last_mut() {
            Some(group) if group.distribution == count => group.nfts.push(nft),
            _ => groups.push(Group { distribution: count, nfts: vec![nft] }),
        }
    }

    Ok(groups)
}
