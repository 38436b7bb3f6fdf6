//! ZiWei stars: the 14 major stars (主星) and 14 minor stars (辅星/煞星).

use serde::{Deserialize, Serialize};

use crate::element::Element;

/// One of the fourteen major stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MajorStar {
    ZiWei,
    TianJi,
    TaiYang,
    WuQu,
    TianTong,
    LianZhen,
    TianFu,
    TaiYin,
    TanLang,
    JuMen,
    TianXiang,
    TianLiang,
    QiSha,
    PoJun,
}

/// All major stars in canonical order.
pub const ALL_MAJOR_STARS: [MajorStar; 14] = [
    MajorStar::ZiWei,
    MajorStar::TianJi,
    MajorStar::TaiYang,
    MajorStar::WuQu,
    MajorStar::TianTong,
    MajorStar::LianZhen,
    MajorStar::TianFu,
    MajorStar::TaiYin,
    MajorStar::TanLang,
    MajorStar::JuMen,
    MajorStar::TianXiang,
    MajorStar::TianLiang,
    MajorStar::QiSha,
    MajorStar::PoJun,
];

impl MajorStar {
    /// Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ZiWei => "紫微",
            Self::TianJi => "天机",
            Self::TaiYang => "太阳",
            Self::WuQu => "武曲",
            Self::TianTong => "天同",
            Self::LianZhen => "廉贞",
            Self::TianFu => "天府",
            Self::TaiYin => "太阴",
            Self::TanLang => "贪狼",
            Self::JuMen => "巨门",
            Self::TianXiang => "天相",
            Self::TianLiang => "天梁",
            Self::QiSha => "七杀",
            Self::PoJun => "破军",
        }
    }

    /// 0-based canonical index.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Five-element nature of the star.
    pub const fn element(self) -> Element {
        match self {
            Self::ZiWei | Self::TianFu | Self::JuMen | Self::TianLiang => Element::Earth,
            Self::TianJi | Self::TanLang => Element::Wood,
            Self::TaiYang | Self::LianZhen => Element::Fire,
            Self::WuQu | Self::QiSha => Element::Metal,
            Self::TianTong | Self::TaiYin | Self::TianXiang | Self::PoJun => Element::Water,
        }
    }
}

/// Content of a palace's major-star list: a star or the empty-palace marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StarSlot {
    Major(MajorStar),
    /// 空宫: no major star in this palace.
    Vacant,
}

impl StarSlot {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Major(s) => s.name(),
            Self::Vacant => "空宫",
        }
    }

    pub const fn star(self) -> Option<MajorStar> {
        match self {
            Self::Major(s) => Some(s),
            Self::Vacant => None,
        }
    }
}

/// One of the fourteen minor stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MinorStar {
    WenChang,
    WenQu,
    ZuoFu,
    YouBi,
    TianKui,
    TianYue,
    LuCun,
    TianMa,
    QingYang,
    TuoLuo,
    HuoXing,
    LingXing,
    DiKong,
    DiJie,
}

/// All minor stars in canonical order.
pub const ALL_MINOR_STARS: [MinorStar; 14] = [
    MinorStar::WenChang,
    MinorStar::WenQu,
    MinorStar::ZuoFu,
    MinorStar::YouBi,
    MinorStar::TianKui,
    MinorStar::TianYue,
    MinorStar::LuCun,
    MinorStar::TianMa,
    MinorStar::QingYang,
    MinorStar::TuoLuo,
    MinorStar::HuoXing,
    MinorStar::LingXing,
    MinorStar::DiKong,
    MinorStar::DiJie,
];

impl MinorStar {
    /// Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::WenChang => "文昌",
            Self::WenQu => "文曲",
            Self::ZuoFu => "左辅",
            Self::YouBi => "右弼",
            Self::TianKui => "天魁",
            Self::TianYue => "天钺",
            Self::LuCun => "禄存",
            Self::TianMa => "天马",
            Self::QingYang => "擎羊",
            Self::TuoLuo => "陀罗",
            Self::HuoXing => "火星",
            Self::LingXing => "铃星",
            Self::DiKong => "地空",
            Self::DiJie => "地劫",
        }
    }

    /// 0-based canonical index.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Malefic (煞) stars: 擎羊 陀罗 火星 铃星 地空 地劫.
    pub const fn is_sha(self) -> bool {
        matches!(
            self,
            Self::QingYang | Self::TuoLuo | Self::HuoXing | Self::LingXing | Self::DiKong | Self::DiJie
        )
    }
}
