/*!
 * Disambiguation of candidate sets through an external chooser.
 *
 * The matching engine never guesses between tied candidates; every ambiguity
 * is surfaced through the `Chooser` capability, which a console prompt
 * implements in production and a scripted double implements in tests.
 */

use async_trait::async_trait;

use crate::matching::MediaFile;

/// Capability to ask an external collaborator to pick one of several options.
///
/// `choose` returns the index of the selected option, or `None` for an
/// explicit "none of the above". Implementations may block on a human
/// answer; the engine awaits one question at a time.
#[async_trait]
pub trait Chooser: Send + Sync {
    /// Present `options` under the given prompt and return the selection
    async fn choose(&self, prompt: &str, options: &[String]) -> Option<usize>;
}

/// Narrow a candidate set to at most one file.
///
/// No candidates resolve to `None`, a single candidate is returned without
/// interaction, and anything more is delegated to the chooser together with
/// an implicit none-of-the-above escape.
pub async fn resolve(
    candidates: &[MediaFile],
    prompt: &str,
    chooser: &dyn Chooser,
) -> Option<MediaFile> {
    match candidates {
        [] => None,
        [only] => Some(only.clone()),
        _ => {
            let options: Vec<String> = candidates.iter().map(MediaFile::file_name).collect();
            let selected = chooser.choose(prompt, &options).await?;
            candidates.get(selected).cloned()
        }
    }
}
