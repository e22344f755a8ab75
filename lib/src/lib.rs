//! A toolkit for generating NFT rarity gallery pages.
//!
//! # Overview
//!
//! Rarify turns a collection metadata document into a single static HTML
//! page. The pipeline is a straight line:
//!
//! 1. A metadata JSON document is read and unwrapped into a [`Collection`]
//!    of records, each enriched with its display fields (asset URL, IPFS
//!    pointer, marketplace and mirror links).
//! 2. Each record's scarcity is computed from the collection-wide sum of
//!    `distribution` counts.
//! 3. Records are sorted by ascending `distribution` and partitioned into
//!    rarity-tier [`Group`]s.
//! 4. The groups are rendered through a template and the result is written
//!    out.
//!
//! Everything runs in one pass, fully in memory; any failure aborts the run
//! and surfaces to the caller.

#[macro_use]
pub mod error;
pub mod casing;
pub mod collection;
pub mod gallery;
pub mod templating;
pub mod source;
pub mod sink;

pub use collection::{Collection, Nft, RawNft};
pub use gallery::Group;
