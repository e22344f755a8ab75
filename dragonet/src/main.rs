use std::path::Path;
use std::process::ExitCode;

use rarify::error::Result;
use rarify::sink::Sink;
use rarify::source::Source;
use rarify::{gallery, templating, Collection, Group};

pub const METADATA_FILE: &str = "nft/block-dragon.json";
pub const TEMPLATE_FILE: &str = "templates/nft.jinja";
pub const OUTPUT_FILE: &str = "index.html";

/// Runs the whole pipeline: read, enrich, group, render, emit. Nothing is
/// written until the render has fully succeeded.
fn generate(template_path: &Path, metadata_path: &Path, output_path: &Path) -> Result<Vec<Group>> {
    let template = template_path.read_text()?;
    let metadata = metadata_path.read_text()?;

    let mut collection = Collection::from_json(&metadata)?;
    let total = gallery::total_distribution(&collection.nfts)?;
    for nft in &mut collection.nfts {
        nft.add_scarcity(total)?;
    }

    let groups = gallery::group_by_distribution(collection.nfts)?;
    let template_name = template_path.to_string_lossy();
    let html = templating::engine().render(&template_name, &template, &groups)?;
    output_path.write_text(&html)?;
    Ok(groups)
}

pub fn main() -> ExitCode {
    let start = std::time::SystemTime::now();
    let result = generate(
        Path::new(TEMPLATE_FILE),
        Path::new(METADATA_FILE),
        Path::new(OUTPUT_FILE),
    );

    match result {
        Ok(groups) => {
            let nfts: usize = groups.iter().map(|group| group.nfts.len()).sum();
            println!("{OUTPUT_FILE}: {nfts} nfts in {} rarity tiers", groups.len());
            println!("total time: {}ms", start.elapsed().unwrap().as_millis());
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("dragonet-{name}-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    const TEMPLATE: &str = "{% for group in groups %}\
        {% for nft in group %}{{ nft.token }}:{{ nft.scarcity_percentage }}\n{% endfor %}\
        {% endfor %}";

    #[test]
    fn test_generate_writes_rendered_output() {
        let dir = scratch_dir("ok");
        let template = dir.join("nft.jinja");
        let metadata = dir.join("metadata.json");
        let output = dir.join("index.html");

        fs::write(&template, TEMPLATE).unwrap();
        fs::write(&metadata, r#"{"721": {"ABC123": {"nfts": {
            "MyToken": {"image": "ipfs://Qm123", "distribution": "5"},
            "OtherToken": {"image": "ipfs://Qm456", "distribution": "5"},
            "RareToken": {"image": "ipfs://Qm789", "distribution": "1"}
        }}}}"#).unwrap();

        let groups = generate(&template, &metadata, &output).unwrap();
        assert_eq!(groups.len(), 2);

        let html = fs::read_to_string(&output).unwrap();
        assert_eq!(html, "RareToken:9.09%\nMyToken:45.45%\nOtherToken:45.45%\n");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_failed_run_leaves_no_output() {
        let dir = scratch_dir("bad");
        let template = dir.join("nft.jinja");
        let metadata = dir.join("metadata.json");
        let output = dir.join("index.html");

        fs::write(&template, TEMPLATE).unwrap();
        fs::write(&metadata, r#"{"721": {"ABC123": {"nfts": {
            "MyToken": {"image": "not-a-uri", "distribution": "5"}
        }}}}"#).unwrap();

        assert!(generate(&template, &metadata, &output).is_err());
        assert!(!output.exists());

        fs::write(&metadata, r#"{"721": {"ABC123": {"nfts": {
            "MyToken": {"image": "ipfs://Qm123", "distribution": "0"}
        }}}}"#).unwrap();

        assert!(generate(&template, &metadata, &output).is_err());
        assert!(!output.exists());

        fs::remove_dir_all(&dir).unwrap();
    }
}
