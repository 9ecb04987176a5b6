//! Literal page content.
//!
//! DESIGN
//! ======
//! Everything the page shows besides chrome lives here as `const` data so the
//! views stay pure functions over fixed records. Nothing in this module is
//! mutated at runtime.


// =============================================================================
// PROFILE
// =============================================================================

/// Static profile record shown in the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub location: &'static str,
    pub school: &'static str,
    pub hobbies: &'static str,
    pub avatar_seed: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "况小宁",
    role: "金融领域从业者",
    location: "湖北",
    school: "湖北大学知行学院",
    hobbies: "爬山、桌球",
    avatar_seed: "kuangning",
};

pub const SITE_TITLE: &str = "况宁的个人空间";
pub const SITE_TAGLINE: &str = "欢迎来到我的数字花园";
pub const FOOTER_TEXT: &str = "© 2024 况小宁的个人空间 | 设计灵感源自温馨治愈系风格";

// =============================================================================
// HOME
// =============================================================================

pub const BIO: &str = "大家好，我是况小宁，一名对金融领域充满热情的从业者。我毕业于湖北大学知行学院金融学专业，在校期间不仅积累了扎实的专业理论基础，还通过丰富的实践活动锻炼了自己的组织与沟通能力。我始终保持着积极的生活态度和清晰的思维，期待在金融行业不断深耕。";

/// One card in the home tab's "latest updates" grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Update {
    pub seed: &'static str,
    pub caption: &'static str,
}

pub const UPDATES: [Update; 3] = [
    Update { seed: "dynamic1", caption: "记录生活中的美好瞬间 - 2024.11.11" },
    Update { seed: "dynamic2", caption: "记录生活中的美好瞬间 - 2024.11.12" },
    Update { seed: "dynamic3", caption: "记录生活中的美好瞬间 - 2024.11.13" },
];

// =============================================================================
// ABOUT
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Education {
    pub title: &'static str,
    /// Only the degree entry carries a date range.
    pub period: Option<&'static str>,
    pub description: &'static str,
}

pub const EDUCATION: [Education; 2] = [
    Education {
        title: "金融学本科 | 湖北大学知行学院",
        period: Some("2017.09 - 2022.06"),
        description: "主修保险学、金融营销、市场营销等课程，打下了扎实的专业理论基础。",
    },
    Education {
        title: "硕士备考经历",
        period: None,
        description: "曾备考西南财经大学保险学硕士，对金融市场有更深入的研究与思考。",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Experience {
    pub title: &'static str,
    pub description: &'static str,
}

pub const EXPERIENCES: [Experience; 3] = [
    Experience {
        title: "学院首个金融协会核心成员",
        description: "担任组织部副部长，组织金融知识普及活动，覆盖超500人。",
    },
    Experience {
        title: "全国金融与证券投资模拟实训大赛",
        description: "负责数据分析与报告撰写，锻炼了数据洞察与团队协作能力。",
    },
    Experience {
        title: "大学生营销大赛",
        description: "策划与执行产品销售方案，成功签单11位客户，提升了市场拓展能力。",
    },
];

/// Background tint of a skill card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Pink,
    Blue,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Self::Pink => "skill-card skill-card--pink",
            Self::Blue => "skill-card skill-card--blue",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub heading: &'static str,
    pub description: &'static str,
    pub accent: Accent,
}

pub const SKILLS: [Skill; 2] = [
    Skill {
        heading: "专业能力",
        description: "扎实的金融理论，熟悉金融产品与市场逻辑。",
        accent: Accent::Pink,
    },
    Skill {
        heading: "软技能",
        description: "抗压能力强，善于换位思考，精准把握客户需求。",
        accent: Accent::Blue,
    },
];

// =============================================================================
// ARTICLES
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Article {
    pub title: &'static str,
    pub date: &'static str,
    pub author: &'static str,
    pub excerpt: &'static str,
    pub seed: &'static str,
}

pub const ARTICLES: [Article; 3] = [
    Article {
        title: "金融市场观察：保险行业的未来趋势",
        date: "2024.11.27",
        author: "况宁",
        excerpt: "随着科技的发展，保险行业正在经历前所未有的变革。本文将从数据化运营和客户需求变化两个维度进行深度分析...",
        seed: "article0",
    },
    Article {
        title: "从营销大赛看客户沟通的艺术",
        date: "2024.10.31",
        author: "况宁",
        excerpt: "在最近的营销大赛中，我深刻体会到，成功的销售不仅仅是卖产品，更是建立信任的过程。通过11位客户的签单经历...",
        seed: "article1",
    },
    Article {
        title: "金融学子的自我修养：理论与实践的结合",
        date: "2024.10.27",
        author: "况宁",
        excerpt: "在湖北大学知行学院的四年里，我一直在思考如何将枯燥的金融理论转化为实际的分析能力。通过参与金融协会...",
        seed: "article2",
    },
];

// =============================================================================
// PORTFOLIO
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PortfolioImage {
    pub seed: &'static str,
}

pub const PORTFOLIO: [PortfolioImage; 8] = [
    PortfolioImage { seed: "portfolio1" },
    PortfolioImage { seed: "portfolio2" },
    PortfolioImage { seed: "portfolio3" },
    PortfolioImage { seed: "portfolio4" },
    PortfolioImage { seed: "portfolio5" },
    PortfolioImage { seed: "portfolio6" },
    PortfolioImage { seed: "portfolio7" },
    PortfolioImage { seed: "portfolio8" },
];
