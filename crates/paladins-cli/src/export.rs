/*
[INPUT]:  Champion list from the getchampions endpoint
[OUTPUT]: `Name = id` enum listing, printed or written to a file
[POS]:    Tooling - champion enum export
[UPDATE]: When the export format changes
*/

use std::path::Path;

use anyhow::Context;
use paladins_api::{ChampionSummary, PaladinsClient};
use tracing::info;

/// One `Name = id` line per champion, in service order
pub fn render_champion_enum(champions: &[ChampionSummary]) -> String {
    champions
        .iter()
        .map(|champ| format!("{} = {}\n", champ.name, champ.id))
        .collect()
}

/// Fetch champions and render them, writing to `output` when given
pub async fn export_champions(
    client: &PaladinsClient,
    output: Option<&Path>,
) -> anyhow::Result<String> {
    let champions = client.get_champions().await.context("fetch champions")?;
    let rendered = render_champion_enum(&champions);

    if let Some(path) = output {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        std::fs::write(path, &rendered)
            .with_context(|| format!("write {}", path.display()))?;
        info!(
            path = %path.display(),
            count = champions.len(),
            "champion enum exported"
        );
    }

    Ok(rendered)
}
