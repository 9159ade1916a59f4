use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

pub mod error;
pub mod share;
mod templates;

pub use error::{Error, Result};
pub use share::{compose_share_text, prepare_share, prepare_share_with_rng, ShareDraft, ShareRequest};

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

/// Content bucket a resource name classifies into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    App,
    Video,
    Course,
    Ebook,
    Template,
    Music,
    Game,
    Font,
    Wallpaper,
    Data,
    Dev,
    Unknown,
}

impl Category {
    pub const ALL: &'static [Category] = &[
        Category::App,
        Category::Video,
        Category::Course,
        Category::Ebook,
        Category::Template,
        Category::Music,
        Category::Game,
        Category::Font,
        Category::Wallpaper,
        Category::Data,
        Category::Dev,
        Category::Unknown,
    ];

    /// Tie-break order when several categories share the top hit count.
    pub const PRIORITY: &'static [Category] = &[
        Category::App,
        Category::Course,
        Category::Video,
        Category::Template,
        Category::Ebook,
        Category::Dev,
        Category::Data,
        Category::Game,
        Category::Music,
        Category::Font,
        Category::Wallpaper,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::App => "app",
            Category::Video => "video",
            Category::Course => "course",
            Category::Ebook => "ebook",
            Category::Template => "template",
            Category::Music => "music",
            Category::Game => "game",
            Category::Font => "font",
            Category::Wallpaper => "wallpaper",
            Category::Data => "data",
            Category::Dev => "dev",
            Category::Unknown => "unknown",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::App => "软件/应用",
            Category::Video => "影视/剧集",
            Category::Course => "课程/教程",
            Category::Ebook => "电子书/资料",
            Category::Template => "模板/素材",
            Category::Music => "音乐/音频",
            Category::Game => "游戏/资源",
            Category::Font => "字体",
            Category::Wallpaper => "壁纸",
            Category::Data => "资料/报告",
            Category::Dev => "源码/项目",
            Category::Unknown => "未识别",
        }
    }

    /// Keyword bucket, as written. Matching normalizes both sides.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::App => &[
                "软件", "app", "应用", "工具", "助手", "神器", "客户端", "mac", "win", "安卓",
                "android", "ios", "播放器", "浏览器", "插件", "扩展", "ocr", "pdf工具", "压缩",
                "录屏", "剪辑", "去广告", "清理", "启动器", "tv", "盒子", "影院", "追剧", "观影",
                "影视", "片源",
            ],
            Category::Video => &[
                "电影", "电视剧", "综艺", "番剧", "动漫", "纪录片", "片单", "蓝光", "1080p", "4k",
                "剧集", "片源合集",
            ],
            Category::Course => &[
                "课程", "教程", "训练营", "网课", "课件", "实战", "视频课", "系统课", "合集课",
            ],
            Category::Ebook => &[
                "电子书", "书籍", "pdf", "mobi", "epub", "读物", "手册", "白皮书", "教辅",
            ],
            Category::Template => &[
                "模板", "素材", "psd", "ai", "ae", "pr", "figma", "sketch", "ppt", "word",
                "excel", "海报", "插画", "图标",
            ],
            Category::Music => &[
                "音乐", "专辑", "无损", "flac", "mp3", "wav", "音频", "有声书", "铃声", "歌单",
            ],
            Category::Game => &[
                "游戏", "mod", "存档", "整合包", "dlc", "汉化", "联机", "模拟器", "switch", "ps",
                "steam",
            ],
            Category::Font => &["字体", "字库", "ttf", "otf", "woff"],
            Category::Wallpaper => &["壁纸", "4k壁纸", "桌面", "无水印", "手机壁纸"],
            Category::Data => &[
                "资料", "笔记", "讲义", "真题", "题库", "课件", "报告", "论文", "数据集", "表格",
            ],
            Category::Dev => &[
                "源码", "源代码", "项目", "脚本", "demo", "sdk", "库", "component",
                "template repo",
            ],
            Category::Unknown => &[],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let id = s.trim().to_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == id)
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

/// Tone used for template lookup once derived tones are collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseTone {
    Plain,
    Marketing,
    Playful,
    Professional,
}

impl BaseTone {
    pub const ALL: &'static [BaseTone] = &[
        BaseTone::Plain,
        BaseTone::Marketing,
        BaseTone::Playful,
        BaseTone::Professional,
    ];
}

/// Stylistic voice of the generated copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Plain,
    Marketing,
    #[serde(alias = "fun")]
    Playful,
    #[serde(alias = "pro")]
    Professional,
    Warm,
    Trendy,
}

impl Tone {
    pub const ALL: &'static [Tone] = &[
        Tone::Plain,
        Tone::Marketing,
        Tone::Playful,
        Tone::Professional,
        Tone::Warm,
        Tone::Trendy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Plain => "plain",
            Tone::Marketing => "marketing",
            Tone::Playful => "playful",
            Tone::Professional => "professional",
            Tone::Warm => "warm",
            Tone::Trendy => "trendy",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tone::Plain => "朴素",
            Tone::Marketing => "营销",
            Tone::Playful => "风趣",
            Tone::Professional => "专业",
            Tone::Warm => "治愈",
            Tone::Trendy => "潮流",
        }
    }

    /// Warm borrows the plain templates and trendy the playful ones.
    pub fn base(self) -> BaseTone {
        match self {
            Tone::Plain | Tone::Warm => BaseTone::Plain,
            Tone::Marketing => BaseTone::Marketing,
            Tone::Playful | Tone::Trendy => BaseTone::Playful,
            Tone::Professional => BaseTone::Professional,
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "fun" => Ok(Tone::Playful),
            "pro" => Ok(Tone::Professional),
            id => Tone::ALL
                .iter()
                .copied()
                .find(|t| t.as_str() == id)
                .ok_or_else(|| Error::UnknownTone(s.to_string())),
        }
    }
}

/// Inclusive target length, counted in grapheme clusters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthRange {
    pub min: usize,
    pub max: usize,
}

impl LengthRange {
    pub fn new(min: usize, max: usize) -> Result<Self> {
        if max == 0 || min > max {
            return Err(Error::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthKind {
    Short,
    Medium,
    Long,
}

impl LengthKind {
    pub const ALL: &'static [LengthKind] = &[LengthKind::Short, LengthKind::Medium, LengthKind::Long];

    pub fn as_str(self) -> &'static str {
        match self {
            LengthKind::Short => "short",
            LengthKind::Medium => "medium",
            LengthKind::Long => "long",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LengthKind::Short => "10~50字",
            LengthKind::Medium => "50~100字",
            LengthKind::Long => "100~200字",
        }
    }

    pub const fn range(self) -> LengthRange {
        match self {
            LengthKind::Short => LengthRange { min: 10, max: 50 },
            LengthKind::Medium => LengthRange { min: 50, max: 100 },
            LengthKind::Long => LengthRange { min: 100, max: 200 },
        }
    }
}

impl fmt::Display for LengthKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LengthKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let id = s.trim().to_lowercase();
        LengthKind::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == id)
            .ok_or_else(|| Error::UnknownLength(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub category: Category,
    /// Keywords of the winning category found in the name, first-match order.
    pub matched: Vec<String>,
    pub reason: String,
}

impl ClassificationResult {
    /// Matched keywords trimmed to the number shown as badges.
    pub fn display_matches(&self) -> &[String] {
        let n = self.matched.len().min(HP.display_match_cap);
        &self.matched[..n]
    }
}

/// Inputs to one copy generation.
#[derive(Debug, Clone, Copy)]
pub struct CopyRequest<'a> {
    pub name: &'a str,
    pub category: Category,
    pub tone: Tone,
    pub include_hashtags: bool,
    /// Matched keywords from classification, used for the summary sentence.
    pub hints: &'a [String],
    pub range: LengthRange,
}

// ---------------------------------------------------------------------------
// Hyperparameters
// ---------------------------------------------------------------------------

struct Hyperparameters {
    hard_max_chars: usize,
    cut_min_ratio: f64,
    keyword_summary_cap: usize,
    display_match_cap: usize,
    warm_suffix_reserve: usize,
    trendy_suffix_reserve: usize,
    watch_marker: &'static str,
    hashtags: &'static [&'static str],
}

static HP: Hyperparameters = Hyperparameters {
    hard_max_chars: 1000,
    cut_min_ratio: 0.7,
    keyword_summary_cap: 3,
    display_match_cap: 4,
    warm_suffix_reserve: 6,
    trendy_suffix_reserve: 2,
    watch_marker: "追剧/观影",
    hashtags: &["网盘资源", "值得收藏"],
};

/// Marks that end a sentence for expansion and cutting.
const SENTENCE_TERMINALS: &[&str] = &["。", "！", "～"];

/// Marks that let the hashtag suffix follow without an inserted full stop.
const HASHTAG_TERMINALS: &[char] = &['。', '！', '～', '.', '!', '?'];

/// Includes U+FE0F so emoji-presentation names count as already emphasized.
const TRENDY_EMPHASIS: &[char] = &['✨', '🔥', '⚡', '\u{FE0F}'];

const WARM_PHRASE: &str = "一起慢慢看";

const REASON_MATCHED: &str = "命中关键词";
const REASON_PRIORITY: &str = "多类别命中，综合判断";
const REASON_WATCH_FALLBACK: &str = "包含追剧/观影相关词";
const REASON_NO_MATCH: &str = "未命中关键词";

// ---------------------------------------------------------------------------
// Compiled patterns
// ---------------------------------------------------------------------------

/// Watch/binge phrasing that rescues names no bucket keyword matched.
static WATCH_FALLBACK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[追看观]剧|追番|观影|看片|片源").unwrap());

/// Names that turn an app into a drama app for template selection.
static DRAMA_APP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[追看观]剧|追番|观影|影视|片源|影院|tv|盒子").unwrap());

static WHITESPACE_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Keyword buckets with each keyword pre-normalized, in `Category::ALL` order.
static NORMALIZED_BUCKETS: Lazy<Vec<(Category, Vec<(&'static str, String)>)>> = Lazy::new(|| {
    Category::ALL
        .iter()
        .filter(|&&c| c != Category::Unknown)
        .map(|&c| {
            let keywords = c.keywords().iter().map(|&kw| (kw, normalize(kw))).collect();
            (c, keywords)
        })
        .collect()
});

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// NFKC, lowercase, trim. Applied to names and keywords alike.
pub fn normalize(s: &str) -> String {
    s.nfkc().collect::<String>().to_lowercase().trim().to_string()
}

/// Trim and collapse whitespace runs to a single space.
fn clean_name(raw: &str) -> String {
    WHITESPACE_RUN_RE.replace_all(raw.trim(), " ").into_owned()
}

fn grapheme_len(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Keep at most `max` grapheme clusters.
fn truncate_graphemes(text: &str, max: usize) -> &str {
    match text.grapheme_indices(true).nth(max) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}

fn ends_with_terminal(text: &str) -> bool {
    SENTENCE_TERMINALS.iter().any(|t| text.ends_with(t))
}

fn dedup_preserving_order<'a, I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(*item))
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

fn classify_normalized(name: &str) -> ClassificationResult {
    let candidates: Vec<(Category, Vec<&'static str>)> = NORMALIZED_BUCKETS
        .iter()
        .filter_map(|(category, keywords)| {
            let hits: Vec<&'static str> = keywords
                .iter()
                .filter(|(_, normalized)| name.contains(normalized.as_str()))
                .map(|&(kw, _)| kw)
                .collect();
            (!hits.is_empty()).then_some((*category, hits))
        })
        .collect();

    if candidates.is_empty() {
        if WATCH_FALLBACK_RE.is_match(name) {
            debug!("no bucket keyword matched; watch/binge fallback applies");
            return ClassificationResult {
                category: Category::App,
                matched: vec![HP.watch_marker.to_string()],
                reason: REASON_WATCH_FALLBACK.to_string(),
            };
        }
        debug!("no keyword matched");
        return ClassificationResult {
            category: Category::Unknown,
            matched: Vec::new(),
            reason: REASON_NO_MATCH.to_string(),
        };
    }

    let max_hits = candidates.iter().map(|(_, hits)| hits.len()).max().unwrap_or(0);
    let top: Vec<Category> = candidates
        .iter()
        .filter(|(_, hits)| hits.len() == max_hits)
        .map(|(category, _)| *category)
        .collect();

    let category = if top.len() == 1 {
        top[0]
    } else {
        let chosen = Category::PRIORITY.iter().copied().find(|p| top.contains(p));
        debug_assert!(chosen.is_some(), "priority order must cover {top:?}");
        chosen.unwrap_or(top[0])
    };

    let matched = dedup_preserving_order(
        candidates
            .iter()
            .filter(|(c, _)| *c == category)
            .flat_map(|(_, hits)| hits.iter().copied()),
    );
    let reason = if matched.is_empty() {
        REASON_PRIORITY
    } else {
        REASON_MATCHED
    };

    debug!(
        %category,
        candidates = candidates.len(),
        tied = top.len(),
        ?matched,
        "classified resource name"
    );

    ClassificationResult {
        category,
        matched,
        reason: reason.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Copy generation
// ---------------------------------------------------------------------------

/// App names about binge-watching get their own templates and fillers.
fn is_drama_app(category: Category, raw_name: &str, hints: &[String]) -> bool {
    category == Category::App
        && (DRAMA_APP_RE.is_match(&normalize(raw_name))
            || hints.iter().any(|h| h == HP.watch_marker))
}

fn keyword_summary(hints: &[String]) -> Option<String> {
    if hints.is_empty() {
        return None;
    }
    let unique = dedup_preserving_order(hints.iter().map(String::as_str));
    let shown: Vec<&str> = unique
        .iter()
        .take(HP.keyword_summary_cap)
        .map(String::as_str)
        .collect();
    Some(format!("按关键词整理：{}。", shown.join("/")))
}

/// Cut text longer than `range.max`: at the last sentence mark at or before
/// offset `range.max` when that keeps at least 70% of `range.min`, else hard
/// at `range.max`. A mark at offset `range.max` yields `range.max + 1`.
fn bound_to_range(text: String, range: LengthRange) -> String {
    if grapheme_len(&text) <= range.max {
        return text;
    }
    let floor = (range.min as f64 * HP.cut_min_ratio).floor() as usize;
    let cut = text
        .grapheme_indices(true)
        .take(range.max + 1)
        .enumerate()
        .filter(|(_, (_, g))| SENTENCE_TERMINALS.contains(g))
        .last();

    match cut {
        Some((index, (byte, g))) if index >= floor => {
            trace!(index, "cut at sentence boundary");
            text[..byte + g.len()].to_string()
        }
        _ => {
            trace!(max = range.max, "hard truncation");
            truncate_graphemes(&text, range.max).to_string()
        }
    }
}

fn expand_within_range<R: Rng>(
    base: String,
    mut extras: Vec<String>,
    range: LengthRange,
    rng: &mut R,
) -> String {
    extras.shuffle(rng);

    let mut out = base;
    let mut appended = 0;
    for extra in &extras {
        if grapheme_len(&out) >= range.min {
            break;
        }
        if !ends_with_terminal(&out) {
            out.push('。');
        }
        out.push_str(extra);
        appended += 1;
    }
    trace!(appended, pool = extras.len(), "expanded base sentence");

    let bounded = bound_to_range(out, range);
    truncate_graphemes(&bounded, HP.hard_max_chars).to_string()
}

fn stylize(text: String, tone: Tone, range: LengthRange) -> String {
    match tone {
        Tone::Warm => {
            let mut t = text.replace('！', "～");
            if grapheme_len(&t) + HP.warm_suffix_reserve < range.max && !t.contains(WARM_PHRASE) {
                if !t.ends_with('。') {
                    t.push('。');
                }
                t.push_str(WARM_PHRASE);
                t.push('～');
            }
            t
        }
        Tone::Trendy => {
            let t = if text.contains(TRENDY_EMPHASIS) {
                text
            } else {
                format!("✨{text}")
            };
            let mut t = t.replace("推荐", "强推").replace("分享", "速分享");
            if grapheme_len(&t) + HP.trendy_suffix_reserve < range.max && !t.ends_with('🔥') {
                t.push_str(" 🔥");
            }
            t
        }
        Tone::Plain | Tone::Marketing | Tone::Playful | Tone::Professional => text,
    }
}

fn append_hashtags(mut text: String) -> String {
    if !text.ends_with(HASHTAG_TERMINALS) {
        text.push('。');
    }
    for tag in HP.hashtags {
        text.push_str(" #");
        text.push_str(tag);
    }
    text
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Classify a free-text resource name into a category.
pub fn classify(raw_name: &str) -> ClassificationResult {
    classify_normalized(&normalize(raw_name))
}

/// Generate share copy using the thread-local random source.
pub fn generate_copy(req: &CopyRequest<'_>) -> String {
    generate_copy_with_rng(req, &mut rand::rng())
}

/// Generate share copy, drawing template choice and filler order from `rng`.
pub fn generate_copy_with_rng<R: Rng>(req: &CopyRequest<'_>, rng: &mut R) -> String {
    let name = clean_name(req.name);
    let drama = is_drama_app(req.category, req.name, req.hints);

    let choices = templates::templates_for(req.category, drama).for_tone(req.tone.base());
    let template = choices[rng.random_range(0..choices.len())];
    let base = templates::render(template, &name);

    let mut extras: Vec<String> = templates::fragments_for(req.category, drama)
        .into_iter()
        .map(str::to_string)
        .collect();
    extras.extend(keyword_summary(req.hints));

    debug!(
        category = %req.category,
        tone = %req.tone,
        drama,
        min = req.range.min,
        max = req.range.max,
        "generating copy"
    );

    let expanded = expand_within_range(base, extras, req.range, rng);
    let styled = stylize(expanded, req.tone, req.range);
    if req.include_hashtags {
        append_hashtags(styled)
    } else {
        styled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn range(min: usize, max: usize) -> LengthRange {
        LengthRange::new(min, max).unwrap()
    }

    #[test]
    fn normalize_folds_width_and_case() {
        assert_eq!(normalize("  ＡＰＰ工具 "), "app工具");
        assert_eq!(normalize("4K"), "4k");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn clean_name_collapses_whitespace() {
        assert_eq!(clean_name("  a \t b\n\nc  "), "a b c");
    }

    #[test]
    fn priority_covers_every_keyword_category() {
        for &c in Category::ALL {
            if c != Category::Unknown {
                assert!(Category::PRIORITY.contains(&c), "{c} missing from priority");
                assert!(!c.keywords().is_empty());
            }
        }
        assert!(!Category::PRIORITY.contains(&Category::Unknown));
    }

    #[test]
    fn tie_resolved_by_priority() {
        // course "课程" vs video "电影": one hit each.
        let r = classify("课程电影");
        assert_eq!(r.category, Category::Course);
        assert_eq!(r.matched, vec!["课程"]);
        assert_eq!(r.reason, REASON_MATCHED);

        let r = classify("素材电子书");
        assert_eq!(r.category, Category::Template);
    }

    #[test]
    fn hit_count_beats_priority() {
        let r = classify("电影电视剧app");
        assert_eq!(r.category, Category::Video);
        assert_eq!(r.matched, vec!["电影", "电视剧"]);
    }

    #[test]
    fn watch_fallback() {
        let r = classify("追番神作");
        assert_eq!(r.category, Category::App);
        assert_eq!(r.matched, vec![HP.watch_marker]);
        assert_eq!(r.reason, REASON_WATCH_FALLBACK);
    }

    #[test]
    fn no_match_is_unknown() {
        let r = classify("随便什么东西");
        assert_eq!(r.category, Category::Unknown);
        assert!(r.matched.is_empty());
        assert_eq!(r.reason, REASON_NO_MATCH);
    }

    #[test]
    fn display_matches_capped() {
        let r = ClassificationResult {
            category: Category::App,
            matched: ["a", "b", "c", "d", "e"].map(String::from).to_vec(),
            reason: REASON_MATCHED.to_string(),
        };
        assert_eq!(r.display_matches().len(), 4);
    }

    #[test]
    fn drama_flag() {
        assert!(is_drama_app(Category::App, "某某TV盒子", &[]));
        assert!(is_drama_app(
            Category::App,
            "xyz",
            &[HP.watch_marker.to_string()]
        ));
        assert!(!is_drama_app(Category::App, "压缩工具", &[]));
        assert!(!is_drama_app(Category::Video, "影视大全", &[]));
    }

    #[test]
    fn keyword_summary_dedups_and_caps() {
        let hints: Vec<String> = ["a", "b", "a", "c", "d"].map(String::from).to_vec();
        assert_eq!(keyword_summary(&hints).as_deref(), Some("按关键词整理：a/b/c。"));
        assert_eq!(keyword_summary(&[]), None);
    }

    #[test]
    fn bound_cuts_at_sentence_mark() {
        let text = "一二三四五六七八。九十一二三四五六七八九十".to_string();
        assert_eq!(bound_to_range(text, range(10, 20)), "一二三四五六七八。");
    }

    #[test]
    fn bound_hard_truncates_when_cut_too_short() {
        // Mark at index 5 is below floor(10 * 0.7) = 7.
        let text = "一二三四五。六七八九十一二三四五六七八九十".to_string();
        let out = bound_to_range(text, range(10, 20));
        assert_eq!(grapheme_len(&out), 20);
        assert!(out.starts_with("一二三四五。六"));
    }

    #[test]
    fn bound_keeps_mark_at_max_offset() {
        let text = format!("{}。二三", "一".repeat(20));
        let out = bound_to_range(text, range(10, 20));
        assert_eq!(out, format!("{}。", "一".repeat(20)));
        assert!(out.ends_with('。'));
    }

    #[test]
    fn bound_ignores_mark_past_max_offset() {
        let text = format!("{}。二", "一".repeat(21));
        assert_eq!(bound_to_range(text, range(10, 20)), "一".repeat(20));
    }

    #[test]
    fn bound_leaves_short_text_alone() {
        assert_eq!(bound_to_range("短句。".to_string(), range(10, 20)), "短句。");
    }

    #[test]
    fn expansion_stops_at_min() {
        let mut rng = StdRng::seed_from_u64(1);
        let extras = vec!["甲乙丙丁。".to_string(); 10];
        let out = expand_within_range("开头".to_string(), extras, range(10, 100), &mut rng);
        // 开头 + 。 + 甲乙丙丁。 + 甲乙丙丁。 = 13 graphemes.
        assert_eq!(out, "开头。甲乙丙丁。甲乙丙丁。");
    }

    #[test]
    fn expansion_accepts_exhausted_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        let out = expand_within_range("开头！".to_string(), vec!["尾。".to_string()], range(50, 100), &mut rng);
        assert_eq!(out, "开头！尾。");
    }

    #[test]
    fn hard_ceiling_applies_to_any_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let base = "字".repeat(1500);
        let out = expand_within_range(base, Vec::new(), range(10, 5000), &mut rng);
        assert_eq!(grapheme_len(&out), HP.hard_max_chars);
    }

    #[test]
    fn warm_softens_and_closes() {
        let out = stylize("好用！".to_string(), Tone::Warm, range(10, 50));
        assert_eq!(out, "好用～。一起慢慢看～");

        let already = stylize("一起慢慢看吧。".to_string(), Tone::Warm, range(10, 50));
        assert_eq!(already, "一起慢慢看吧。");

        let no_room = stylize("一二三四五。".to_string(), Tone::Warm, range(1, 12));
        assert_eq!(no_room, "一二三四五。");
    }

    #[test]
    fn trendy_decorates() {
        let out = stylize("推荐这个，欢迎分享。".to_string(), Tone::Trendy, range(10, 50));
        assert_eq!(out, "✨强推这个，欢迎速分享。 🔥");

        let out = stylize("🔥已经很火".to_string(), Tone::Trendy, range(10, 50));
        assert_eq!(out, "🔥已经很火 🔥");
    }

    #[test]
    fn trendy_skips_sparkle_for_emoji_presentation() {
        let out = stylize("☀\u{FE0F}好".to_string(), Tone::Trendy, range(10, 50));
        assert_eq!(out, "☀\u{FE0F}好 🔥");
    }

    #[test]
    fn base_tones_are_untouched() {
        for tone in [Tone::Plain, Tone::Marketing, Tone::Playful, Tone::Professional] {
            assert_eq!(stylize("推荐！".to_string(), tone, range(10, 50)), "推荐！");
        }
    }

    #[test]
    fn hashtags_add_full_stop_when_needed() {
        assert_eq!(append_hashtags("好".to_string()), "好。 #网盘资源 #值得收藏");
        assert_eq!(append_hashtags("好!".to_string()), "好! #网盘资源 #值得收藏");
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let hints = vec!["软件".to_string()];
        let req = CopyRequest {
            name: "XX软件助手",
            category: Category::App,
            tone: Tone::Trendy,
            include_hashtags: true,
            hints: &hints,
            range: LengthKind::Long.range(),
        };
        let a = generate_copy_with_rng(&req, &mut StdRng::seed_from_u64(42));
        let b = generate_copy_with_rng(&req, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn parses_ids() {
        assert_eq!("Video".parse::<Category>().unwrap(), Category::Video);
        assert_eq!("fun".parse::<Tone>().unwrap(), Tone::Playful);
        assert_eq!("pro".parse::<Tone>().unwrap(), Tone::Professional);
        assert_eq!("long".parse::<LengthKind>().unwrap(), LengthKind::Long);
        assert!(matches!("x".parse::<Tone>(), Err(Error::UnknownTone(_))));
        assert!(LengthRange::new(20, 10).is_err());
        assert!(LengthRange::new(0, 0).is_err());
    }
}
