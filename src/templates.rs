//! Static copy tables: base-sentence templates per (category, tone) and the
//! filler fragments used to pad copy toward the requested length.

use crate::{BaseTone, Category};

/// Placeholder replaced by the bracket-quoted resource name.
const NAME_SLOT: &str = "{name}";

// ---------------------------------------------------------------------------
// Template rendering
// ---------------------------------------------------------------------------

/// Base-sentence templates for one category, keyed by base tone.
#[derive(Debug)]
pub struct ToneTemplates {
    pub plain: &'static [&'static str],
    pub marketing: &'static [&'static str],
    pub playful: &'static [&'static str],
    pub professional: &'static [&'static str],
}

impl ToneTemplates {
    pub fn for_tone(&self, tone: BaseTone) -> &'static [&'static str] {
        match tone {
            BaseTone::Plain => self.plain,
            BaseTone::Marketing => self.marketing,
            BaseTone::Playful => self.playful,
            BaseTone::Professional => self.professional,
        }
    }
}

/// Render a template, interpolating the cleaned name as `《name》`.
pub fn render(template: &str, name: &str) -> String {
    template.replace(NAME_SLOT, name)
}

/// Template set for a category. `drama` selects the watch/binge variant of
/// the app category and is ignored elsewhere.
pub fn templates_for(category: Category, drama: bool) -> &'static ToneTemplates {
    match category {
        Category::App if drama => &APP_DRAMA,
        Category::App => &APP,
        Category::Video => &VIDEO,
        Category::Course => &COURSE,
        Category::Ebook => &EBOOK,
        Category::Template => &TEMPLATE,
        Category::Music => &MUSIC,
        Category::Game => &GAME,
        Category::Font => &FONT,
        Category::Wallpaper => &WALLPAPER,
        Category::Data => &DATA,
        Category::Dev => &DEV,
        Category::Unknown => &UNKNOWN,
    }
}

static APP_DRAMA: ToneTemplates = ToneTemplates {
    plain: &[
        "《{name}》追剧利器，聚合片源、更新提醒，界面清爽即开即用。",
        "安利《{name}》，智能追更＋片源聚合，打开就能看，操作简单不折腾。",
    ],
    marketing: &[
        "追剧党的福音《{name}》！聚合片源＋追更提醒，清爽无干扰。现在入手～",
        "高能推荐《{name}》，热门剧集快更不错过，观影更顺滑。抓紧转存！",
    ],
    playful: &[
        "追剧冲冲冲，用《{name}》！更新不掉队，片源不东找西翻，打开就看～",
        "《{name}》真香！追更提醒＋聚合片源，追剧不再手忙脚乱～安排！",
    ],
    professional: &[
        "发布《{name}》，聚合片源与更新提醒，降低检索成本，提升观影效率。建议收藏。",
        "《{name}》支持片源聚合/追更通知，体验清爽，适合日常追剧使用。",
    ],
};

static APP: ToneTemplates = ToneTemplates {
    plain: &[
        "《{name}》，功能实用、上手即用，日常效率加倍。轻量稳定，值得长期收藏。",
        "推荐《{name}》，常用场景一网打尽，安装即用少踩坑。",
    ],
    marketing: &[
        "限时分享《{name}》，高效率工具，安装即战斗。工作/学习两不误～",
        "提升效率用《{name}》，关键功能齐备，少折腾更专注。别错过！",
    ],
    playful: &[
        "这款《{name}》太顺手！一把梭日常任务，轻便不打扰～收下不亏。",
        "《{name}》用过都说好，爽利不臃肿，效率直接起飞～",
    ],
    professional: &[
        "资源《{name}》，功能聚焦、体验稳定，适合长期使用场景。欢迎查阅与转存。",
        "整理《{name}》，覆盖核心需求，减少配置时间，提升执行效率。建议收藏。",
    ],
};

static VIDEO: ToneTemplates = ToneTemplates {
    plain: &[
        "《{name}》高清整理，分类清楚、更新及时，支持快速检索与观看/下载。",
        "分享《{name}》，清晰度高，片单规整，追更友好。自用与分享都合适。",
    ],
    marketing: &[
        "高分片单《{name}》，高清无水印，追更不掉队。想看就转存～",
        "强烈推荐《{name}》，清晰度拉满，分类清爽更好找。入手不亏！",
    ],
    playful: &[
        "《{name}》安排！清晰好看不糊眼，片单一键到位～看片不迷路。",
        "好片别错过，《{name}》给你安排得明明白白～冲！",
    ],
    professional: &[
        "发布《{name}》，按剧集/年份等维度整理，清晰度与更新频率良好，便于检索。",
        "《{name}》，结构规整、片源完整，适合系统观看与收藏。",
    ],
};

static COURSE: ToneTemplates = ToneTemplates {
    plain: &[
        "《{name}》系统课程，含配套资料/源码，适合新手到进阶，按章节学习更高效。",
        "分享《{name}》，结构清晰、要点覆盖全面，学习路径明确，值得收藏。",
    ],
    marketing: &[
        "高效进阶《{name}》，核心知识一次掌握，资料齐备即学即用。抓紧转存～",
        "强推《{name}》，体系化内容＋实操示例，学习效率翻倍！",
    ],
    playful: &[
        "《{name}》学就完了！思路清晰不绕弯，跟着做很快见效～",
        "安排《{name}》，少踩坑多进步，学习不弯路～",
    ],
    professional: &[
        "发布《{name}》，覆盖核心概念与实践案例，便于系统性学习与复盘。",
        "《{name}》结构化良好，适合阶段性提升与知识巩固。建议收藏。",
    ],
};

static EBOOK: ToneTemplates = ToneTemplates {
    plain: &[
        "《{name}》电子书/资料，排版清晰、目录完整，便于检索与笔记整理。",
        "分享《{name}》，可快速查阅的高质量读物，值得常备。",
    ],
    marketing: &[
        "精选读物《{name}》，高清易读，学习/查阅两相宜。现在转存不丢！",
        "高分推荐《{name}》，要点清晰、重点直达，速收～",
    ],
    playful: &[
        "《{name}》读起来顺手，查资料更省心。收藏随时翻！",
        "这本《{name}》很顶，重点都在这儿～",
    ],
    professional: &[
        "《{name}》，结构清晰、可检索性好，适合长期学习与参考。",
        "整理《{name}》，内容完整度较高，建议纳入资料库。",
    ],
};

static TEMPLATE: ToneTemplates = ToneTemplates {
    plain: &[
        "《{name}》模板/素材，即下即用，含多格式文件，适合快速出图与排版。",
        "分享《{name}》，风格多样、可编辑，效率直线上升。",
    ],
    marketing: &[
        "效率神器《{name}》，套用即成片，做事更快一步！",
        "强推《{name}》模板库，质量在线，提升产出不费劲～",
    ],
    playful: &[
        "《{name}》一套搞定！设计排版不再手忙脚乱～",
        "素材真香，《{name}》助你轻松拿捏风格～",
    ],
    professional: &[
        "发布《{name}》，覆盖常见场景模板，编辑灵活，适合快速交付。",
        "《{name}》素材整理规范，可复用性强，建议收藏。",
    ],
};

static MUSIC: ToneTemplates = ToneTemplates {
    plain: &[
        "《{name}》音乐整理，高音质、分类清楚，听歌学习两不误。",
        "分享《{name}》，曲库丰富，目录清晰，随取随用。",
    ],
    marketing: &[
        "听感升级《{name}》，无损曲库即刻拥有！收藏不亏～",
        "强推《{name}》，音质在线，风格齐全，一键转存～",
    ],
    playful: &[
        "安排《{name}》，好歌循环根本停不下来～",
        "《{name}》快乐加倍，耳朵要被宠坏啦～",
    ],
    professional: &[
        "《{name}》曲库整理度高，标签与目录清晰，便于筛选与收藏。",
        "发布《{name}》，音质与分类良好，可作为日常曲库使用。",
    ],
};

static GAME: ToneTemplates = ToneTemplates {
    plain: &[
        "《{name}》游戏资源，版本稳定，安装步骤简单，开箱即玩。",
        "分享《{name}》，配置说明清楚，上手不费劲。",
    ],
    marketing: &[
        "开玩即爽《{name}》，稳定流畅不折腾，速速收藏！",
        "强推《{name}》，一键上手，快乐拉满～",
    ],
    playful: &["《{name}》走起！畅玩不停～", "安排《{name}》，快乐就现在！"],
    professional: &[
        "《{name}》，版本清晰、说明完善，适合快速部署与体验。",
        "发布《{name}》，兼容性与稳定性良好，建议收藏。",
    ],
};

static FONT: ToneTemplates = ToneTemplates {
    plain: &[
        "《{name}》字体包，字重齐全、渲染清晰，适合设计与排版使用。使用前请自查授权。",
        "分享《{name}》，风格多样，覆盖常见场景。请留意商用许可。",
    ],
    marketing: &[
        "高质量《{name}》，字重齐全即用即搭！收藏不亏～",
        "推荐《{name}》，设计排版一键匹配，效率up！",
    ],
    playful: &[
        "《{name}》好看又好用，搭配出片没难度～",
        "这套《{name}》真香，风格拿捏住了～",
    ],
    professional: &[
        "《{name}》收录完整，字形质量良好，适合专业设计场景。授权自查。",
        "发布《{name}》，覆盖常用字重，使用灵活。",
    ],
};

static WALLPAPER: ToneTemplates = ToneTemplates {
    plain: &[
        "《{name}》壁纸合集，4K/无水印，风格多样，手机/桌面都好看。",
        "分享《{name}》，即下即用，高颜值耐看。",
    ],
    marketing: &[
        "高能颜值《{name}》，一键换新桌面！速速收藏～",
        "强推《{name}》，清晰细腻，随心切换风格～",
    ],
    playful: &["《{name}》太好看啦！换上心情都变好～", "安排《{name}》，桌面焕然一新～"],
    professional: &[
        "《{name}》画质优秀、主题多样，适合作为壁纸素材库。",
        "发布《{name}》，分辨率与观感表现良好。",
    ],
};

static DATA: ToneTemplates = ToneTemplates {
    plain: &[
        "《{name}》资料整理，分类清晰、可检索，适合备考/研究/工作参考。",
        "分享《{name}》，要点集中，查找更高效。",
    ],
    marketing: &[
        "效率提升《{name}》，关键信息一目了然，检索迅速！",
        "强推《{name}》，资料齐备，省时省力～",
    ],
    playful: &["《{name}》查资料不再抓狂～一搜即得！", "安排《{name}》，学习办公都好用～"],
    professional: &[
        "《{name}》，结构化整理，标签清晰，便于快速定位内容。",
        "发布《{name}》，覆盖核心主题，检索体验友好。",
    ],
};

static DEV: ToneTemplates = ToneTemplates {
    plain: &[
        "《{name}》源码/项目，结构清晰，含README与依赖说明，适合学习与二次开发。",
        "分享《{name}》，示例完善，上手快。",
    ],
    marketing: &[
        "高质量《{name}》，代码清爽，拿来即用！收藏不亏～",
        "强推《{name}》，实战价值高，学习效率翻倍～",
    ],
    playful: &[
        "《{name}》上手就会爱，不卷配置只卷结果～",
        "安排《{name}》，造轮子不再累～",
    ],
    professional: &[
        "《{name}》工程化良好，依赖明确，便于集成与复用。",
        "发布《{name}》，目录规范，示例完整，建议收藏。",
    ],
};

static UNKNOWN: ToneTemplates = ToneTemplates {
    plain: &[
        "分享《{name}》，内容实用、取用便捷，适合收藏备用。需要的朋友自取～",
        "《{name}》，整理齐全，上手简单。喜欢就收下吧！",
    ],
    marketing: &[
        "限时分享《{name}》，质量在线，入手不亏～抓紧转存！",
        "强推《{name}》，即用即得，效率up！",
    ],
    playful: &["《{name}》真香！用起来就是顺手～", "安排《{name}》，省心好用不费劲～"],
    professional: &[
        "发布《{name}》，结构清晰、体验友好。欢迎查阅与转存。",
        "《{name}》，覆盖常见场景，建议收藏。",
    ],
};

// ---------------------------------------------------------------------------
// Filler fragments
// ---------------------------------------------------------------------------

/// Shared by every category.
static GENERIC_FRAGMENTS: &[&str] = &[
    "结构清晰、取用便捷，减少检索与筛选时间。",
    "适合日常使用与长期收藏，随用随取更省心。",
    "包含基础说明与注意事项，新手也能快速上手。",
    "建议转存至个人网盘，避免失效与遗漏。",
];

/// Added for the app category only when the watch/binge flag is set.
static DRAMA_FRAGMENTS: &[&str] = &[
    "聚合片源与更新提醒，热门剧集不错过，追更体验顺滑。",
    "支持片单订阅与历史记录，想看就看，不再东找西翻。",
    "清晰度与加载速度表现稳定，观影过程更连贯。",
];

fn category_fragments(category: Category) -> &'static [&'static str] {
    match category {
        Category::App => &[
            "界面清爽不打扰，核心功能直达，不用冗余设置。",
            "支持快捷搜索与分类管理，常用场景一步到位。",
            "安装与更新步骤简单，兼容性与稳定性良好。",
        ],
        Category::Video => &[
            "清晰度与音画表现优良，片单分类一目了然。",
            "按年份/类型/地区整理，检索效率更高。",
            "适合边看边收藏，方便后续回看与推荐。",
        ],
        Category::Course => &[
            "章节编排循序渐进，配套资料/练习题便于巩固。",
            "包含实操示例与要点总结，学完即可应用。",
            "适合从入门到进阶的连续学习。",
        ],
        Category::Ebook => &[
            "目录与书签完善，检索关键词更高效。",
            "排版清晰可读，适合做笔记与标注。",
            "重点内容覆盖完整，可作为日常参考。",
        ],
        Category::Template => &[
            "多风格多尺寸覆盖常见场景，改动门槛低。",
            "可编辑图层/组件规范，二次创作更高效。",
            "适合快速出图与团队协作提交。",
        ],
        Category::Music => &[
            "音质与标签整理良好，按曲风/专辑筛选更便捷。",
            "适合通勤/学习/办公等场景循环播放。",
        ],
        Category::Game => &[
            "含必要的配置说明与注意事项，安装流程清晰。",
            "启动即玩，支持常见外设与分辨率设置。",
        ],
        Category::Font => &[
            "字重覆盖常见场景，渲染清晰便于排版。",
            "商用前请自查授权，合理合规使用。",
        ],
        Category::Wallpaper => &[
            "分辨率与观感表现良好，手机/桌面适配友好。",
            "风格多样，随心切换营造氛围。",
        ],
        Category::Data => &[
            "分类标签清晰，检索路径明确。",
            "适用于备考/研究/工作参考，减少信息收集时间。",
        ],
        Category::Dev => &[
            "目录结构与依赖说明规范，便于集成与复用。",
            "示例与 README 完整，二次开发上手快。",
        ],
        Category::Unknown => &[],
    }
}

/// Filler pool for a category: the generic set, the category set, and the
/// drama set when `drama` applies to the app category.
pub fn fragments_for(category: Category, drama: bool) -> Vec<&'static str> {
    let mut pool: Vec<&'static str> = GENERIC_FRAGMENTS.to_vec();
    pool.extend_from_slice(category_fragments(category));
    if drama && category == Category::App {
        pool.extend_from_slice(DRAMA_FRAGMENTS);
    }
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_sets() -> Vec<&'static ToneTemplates> {
        let mut sets: Vec<_> = Category::ALL
            .iter()
            .map(|&c| templates_for(c, false))
            .collect();
        sets.push(templates_for(Category::App, true));
        sets
    }

    #[test]
    fn every_template_interpolates_the_name_once() {
        for set in all_sets() {
            for &tone in BaseTone::ALL {
                let templates = set.for_tone(tone);
                assert!(!templates.is_empty(), "empty cell for {tone:?}");
                for t in templates {
                    assert_eq!(t.matches(NAME_SLOT).count(), 1, "bad template: {t}");
                    assert!(render(t, "X").contains("《X》"));
                }
            }
        }
    }

    #[test]
    fn templates_never_carry_hashtags() {
        for set in all_sets() {
            for &tone in BaseTone::ALL {
                assert!(set.for_tone(tone).iter().all(|t| !t.contains('#')));
            }
        }
    }

    #[test]
    fn drama_variant_only_changes_app() {
        assert!(std::ptr::eq(
            templates_for(Category::Video, true),
            templates_for(Category::Video, false)
        ));
        assert!(!std::ptr::eq(
            templates_for(Category::App, true),
            templates_for(Category::App, false)
        ));
    }

    #[test]
    fn fragment_pools() {
        assert_eq!(fragments_for(Category::Unknown, false).len(), 4);
        assert_eq!(fragments_for(Category::App, false).len(), 7);
        assert_eq!(fragments_for(Category::App, true).len(), 10);
        // The drama set never leaks into other categories.
        assert_eq!(fragments_for(Category::Video, true).len(), 7);
    }

    #[test]
    fn fragments_end_in_a_full_stop() {
        for &c in Category::ALL {
            for f in fragments_for(c, true) {
                assert!(f.ends_with('。'), "fragment lacks terminal mark: {f}");
            }
        }
    }
}
