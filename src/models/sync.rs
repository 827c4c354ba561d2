use crate::models::{StoryRegistry, Worksheet};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Force `demand.htf_story` to match the registry entry for the worksheet pair.
///
/// One-directional (registry -> worksheet) and idempotent. Must run after any change to
/// the worksheet pair or to the registry. This is the only writer of `htf_story`.
pub fn resync(mut worksheet: Worksheet, registry: &StoryRegistry) -> Worksheet {
    let story = registry.get(worksheet.pair).story;
    if worksheet.demand.htf_story != story {
        #[cfg(debug_assertions)]
        if DF.log_sync {
            log::info!(
                "HTF sync {}: {} -> {}",
                worksheet.pair,
                worksheet.demand.htf_story,
                story
            );
        }
        worksheet.demand.htf_story = story;
    }
    worksheet
}
