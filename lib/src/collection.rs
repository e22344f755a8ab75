use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::casing;
use crate::error::{Result, Chainable};

/// A single NFT record as found in the metadata document.
///
/// Fields beyond `image` and `distribution` are kept in `extra` so templates
/// can still see them after enrichment.
#[derive(Debug, Clone, Deserialize)]
pub struct RawNft {
    pub image: String,
    pub distribution: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A fully enriched NFT record: the raw fields plus every derived display
/// field the gallery template consumes.
#[derive(Debug, Clone, Serialize)]
pub struct Nft {
    pub policy_id: String,
    pub token: String,
    pub image: String,
    pub distribution: String,
    pub url: String,
    pub ipfs: String,
    pub pool_pm: String,
    pub ipfs_url: String,
    pub scarcity: f64,
    pub scarcity_percentage: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Nft {
    /// Enriches a raw record with its derived display fields.
    ///
    /// The IPFS pointer is the segment of `image` between the first two
    /// `://` separators; an `image` without a separator is a data error.
    pub fn process(policy_id: &str, token: &str, raw: RawNft) -> Result<Nft> {
        let ipfs = raw.image.split("://")
            .nth(1)
            .ok_or_else(|| error! {
                "malformed image field: expected `scheme://payload`",
                "token" => token,
                "image" => raw.image,
            })?
            .to_string();

        let stem = casing::to_kebab_case(&casing::from_pascal_case(token));
        Ok(Nft {
            url: format!("./nft/{stem}.png"),
            pool_pm: format!("https://pool.pm/{policy_id}.{token}"),
            ipfs_url: format!("https://cloudflare-ipfs.com/ipfs/{ipfs}"),
            ipfs,
            policy_id: policy_id.to_string(),
            token: token.to_string(),
            image: raw.image,
            distribution: raw.distribution,
            scarcity: 0.0,
            scarcity_percentage: String::new(),
            extra: raw.extra,
        })
    }

    /// The record's `distribution` as an integer count.
    pub fn distribution_count(&self) -> Result<u64> {
        self.distribution.trim()
            .parse()
            .chain_with(|| error! {
                "non-integer distribution",
                "token" => self.token,
                "value" => self.distribution,
            })
    }

    /// Fills in `scarcity` and `scarcity_percentage` given the sum of
    /// `distribution` across the whole collection.
    pub fn add_scarcity(&mut self, total: u64) -> Result<()> {
        if total == 0 {
            return err!("zero total distribution");
        }

        self.scarcity = self.distribution_count()? as f64 / total as f64;
        self.scarcity_percentage = format!("{:.2}%", self.scarcity * 100.0);
        Ok(())
    }
}

/// An NFT collection: the policy id and its enriched records, in document
/// order.
#[derive(Debug)]
pub struct Collection {
    pub policy_id: String,
    pub nfts: Vec<Nft>,
}

impl Collection {
    /// Parses a collection metadata document and enriches every record.
    ///
    /// The document nests as `{label: {policy_id: {label: {token: record}}}}`.
    /// The policy id is the first key of the document's first value, and the
    /// records come from the first value below it. "First" is first-in-file:
    /// `serde_json`'s `preserve_order` feature keeps document order.
    pub fn from_json(input: &str) -> Result<Collection> {
        let document: Map<String, Value> = serde_json::from_str(input)
            .chain("metadata document is not a JSON object")?;

        let policies = document.values()
            .next()
            .and_then(Value::as_object)
            .ok_or_else(|| error!("metadata document has no policy mapping"))?;

        let (policy_id, labels) = policies.iter()
            .next()
            .ok_or_else(|| error!("metadata document names no policy id"))?;

        let records = labels.as_object()
            .and_then(|labels| labels.values().next())
            .and_then(Value::as_object)
            .ok_or_else(|| error! {
                "policy entry holds no token records",
                "policy id" => policy_id,
            })?;

        let mut nfts = Vec::with_capacity(records.len());
        for (token, record) in records {
            let raw: RawNft = serde_json::from_value(record.clone())
                .chain_with(|| error! {
                    "malformed NFT record",
                    "token" => token,
                })?;

            nfts.push(Nft::process(policy_id, token, raw)?);
        }

        Ok(Collection { policy_id: policy_id.clone(), nfts })
    }
}
