//! End-to-end share draft: classify the name, honour a manual category,
//! generate copy and attach the link.

use rand::Rng;
use serde::Serialize;
use tracing::info;

use crate::{
    classify, generate_copy_with_rng, Category, ClassificationResult, CopyRequest, Error,
    LengthKind, LengthRange, Result, Tone,
};

#[derive(Debug, Clone)]
pub struct ShareRequest {
    pub name: String,
    pub link: Option<String>,
    /// Manual category; `None` uses the classifier's pick.
    pub category: Option<Category>,
    pub tone: Tone,
    pub length: LengthRange,
    pub include_hashtags: bool,
}

impl Default for ShareRequest {
    fn default() -> Self {
        Self {
            name: String::new(),
            link: None,
            category: None,
            tone: Tone::Plain,
            length: LengthKind::Medium.range(),
            include_hashtags: true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ShareDraft {
    pub classification: ClassificationResult,
    /// Category the copy was written for.
    pub category: Category,
    pub overridden: bool,
    pub copy: String,
    /// Copy plus the link line, ready for the clipboard.
    pub share_text: String,
}

/// Join copy and link into the text that gets shared. Blank parts are dropped.
pub fn compose_share_text(copy: &str, link: Option<&str>) -> String {
    let link_line = link
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| format!("链接：{l}"));

    std::iter::once(copy.to_string())
        .chain(link_line)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn prepare_share(req: &ShareRequest) -> Result<ShareDraft> {
    prepare_share_with_rng(req, &mut rand::rng())
}

pub fn prepare_share_with_rng<R: Rng>(req: &ShareRequest, rng: &mut R) -> Result<ShareDraft> {
    if req.name.trim().is_empty() {
        return Err(Error::EmptyName);
    }

    let classification = classify(&req.name);
    let category = req.category.unwrap_or(classification.category);
    let copy = generate_copy_with_rng(
        &CopyRequest {
            name: &req.name,
            category,
            tone: req.tone,
            include_hashtags: req.include_hashtags,
            hints: &classification.matched,
            range: req.length,
        },
        rng,
    );
    let share_text = compose_share_text(&copy, req.link.as_deref());

    info!(
        detected = %classification.category,
        %category,
        tone = %req.tone,
        "prepared share draft"
    );

    Ok(ShareDraft {
        overridden: req.category.is_some(),
        classification,
        category,
        copy,
        share_text,
    })
}
