//! Shensha (神煞) markers.
//!
//! Each marker is keyed off either the stem or the branch of a pillar and
//! points at one or more target branches. Some stem-keyed tables have no
//! entry for Yin stems; those lookups come back as [`Lookup::Unknown`].

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::lookup::Lookup;
use crate::pillar::Pillar;
use crate::stem::Stem;

/// Which half of a pillar a marker is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ShenShaKey {
    Stem,
    Branch,
}

/// All supported markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShenSha {
    #[serde(rename = "天乙贵人")]
    TianYiGuiRen,
    #[serde(rename = "禄神")]
    LuShen,
    #[serde(rename = "羊刃")]
    YangRen,
    #[serde(rename = "飞刃")]
    FeiRen,
    #[serde(rename = "红艳")]
    HongYan,
    #[serde(rename = "金舆")]
    JinYu,
    #[serde(rename = "学堂")]
    XueTang,
    #[serde(rename = "驿马")]
    YiMa,
    #[serde(rename = "华盖")]
    HuaGai,
    #[serde(rename = "桃花")]
    TaoHua,
    #[serde(rename = "红鸾")]
    HongLuan,
    #[serde(rename = "天喜")]
    TianXi,
    #[serde(rename = "孤辰")]
    GuChen,
    #[serde(rename = "寡宿")]
    GuaSu,
    #[serde(rename = "亡神")]
    WangShen,
    #[serde(rename = "劫煞")]
    JieSha,
    #[serde(rename = "丧门")]
    SangMen,
    #[serde(rename = "吊客")]
    DiaoKe,
}

/// Stem-keyed markers in display order.
pub const STEM_SHENSHA: [ShenSha; 7] = [
    ShenSha::TianYiGuiRen,
    ShenSha::LuShen,
    ShenSha::YangRen,
    ShenSha::FeiRen,
    ShenSha::HongYan,
    ShenSha::JinYu,
    ShenSha::XueTang,
];

/// Branch-keyed markers in display order.
pub const BRANCH_SHENSHA: [ShenSha; 11] = [
    ShenSha::YiMa,
    ShenSha::HuaGai,
    ShenSha::TaoHua,
    ShenSha::HongLuan,
    ShenSha::TianXi,
    ShenSha::GuChen,
    ShenSha::GuaSu,
    ShenSha::WangShen,
    ShenSha::JieSha,
    ShenSha::SangMen,
    ShenSha::DiaoKe,
];

impl ShenSha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::TianYiGuiRen => "天乙贵人",
            Self::LuShen => "禄神",
            Self::YangRen => "羊刃",
            Self::FeiRen => "飞刃",
            Self::HongYan => "红艳",
            Self::JinYu => "金舆",
            Self::XueTang => "学堂",
            Self::YiMa => "驿马",
            Self::HuaGai => "华盖",
            Self::TaoHua => "桃花",
            Self::HongLuan => "红鸾",
            Self::TianXi => "天喜",
            Self::GuChen => "孤辰",
            Self::GuaSu => "寡宿",
            Self::WangShen => "亡神",
            Self::JieSha => "劫煞",
            Self::SangMen => "丧门",
            Self::DiaoKe => "吊客",
        }
    }

    pub const fn keyed_by(self) -> ShenShaKey {
        match self {
            Self::TianYiGuiRen
            | Self::LuShen
            | Self::YangRen
            | Self::FeiRen
            | Self::HongYan
            | Self::JinYu
            | Self::XueTang => ShenShaKey::Stem,
            _ => ShenShaKey::Branch,
        }
    }

    /// Target branches of this marker for `pillar`.
    pub fn targets(self, pillar: Pillar) -> Lookup<&'static [Branch]> {
        match self.keyed_by() {
            ShenShaKey::Stem => stem_targets(self, pillar.stem()),
            ShenShaKey::Branch => Lookup::Found(branch_targets(self, pillar.branch())),
        }
    }
}

/// One-element slices for each branch, so computed targets can be `'static`.
static SINGLE: [[Branch; 1]; 12] = [
    [Branch::Zi],
    [Branch::Chou],
    [Branch::Yin],
    [Branch::Mao],
    [Branch::Chen],
    [Branch::Si],
    [Branch::Wu],
    [Branch::Wei],
    [Branch::Shen],
    [Branch::You],
    [Branch::Xu],
    [Branch::Hai],
];

fn one(branch: Branch) -> &'static [Branch] {
    &SINGLE[branch.index() as usize]
}

fn stem_targets(kind: ShenSha, stem: Stem) -> Lookup<&'static [Branch]> {
    use Branch as B;
    use Stem as S;
    let targets: Option<&'static [Branch]> = match kind {
        ShenSha::TianYiGuiRen => {
            let pair: &'static [Branch] = match stem {
                S::Jia | S::Wu | S::Geng => &[B::Chou, B::Wei],
                S::Yi | S::Ji => &[B::Zi, B::Shen],
                S::Bing | S::Ding => &[B::Hai, B::You],
                S::Xin => &[B::Wu, B::Yin],
                S::Ren | S::Gui => &[B::Mao, B::Si],
            };
            Some(pair)
        }
        ShenSha::LuShen => Some(one(match stem {
            S::Jia => B::Yin,
            S::Yi => B::Mao,
            S::Bing | S::Wu => B::Si,
            S::Ding | S::Ji => B::Wu,
            S::Geng => B::Shen,
            S::Xin => B::You,
            S::Ren => B::Hai,
            S::Gui => B::Zi,
        })),
        ShenSha::YangRen => match stem {
            S::Jia => Some(one(B::Mao)),
            S::Bing | S::Wu => Some(one(B::Wu)),
            S::Geng => Some(one(B::You)),
            S::Ren => Some(one(B::Zi)),
            _ => None,
        },
        // 飞刃 is the clash of 羊刃.
        ShenSha::FeiRen => match stem {
            S::Jia => Some(one(B::You)),
            S::Bing | S::Wu => Some(one(B::Zi)),
            S::Geng => Some(one(B::Mao)),
            S::Ren => Some(one(B::Wu)),
            _ => None,
        },
        ShenSha::HongYan => Some(one(match stem {
            S::Jia | S::Yi => B::Wu,
            S::Bing => B::Yin,
            S::Ding => B::Wei,
            S::Wu | S::Ji => B::Chen,
            S::Geng => B::Xu,
            S::Xin => B::You,
            S::Ren => B::Zi,
            S::Gui => B::Shen,
        })),
        ShenSha::JinYu => Some(one(match stem {
            S::Jia => B::Chen,
            S::Yi => B::Si,
            S::Bing | S::Wu => B::Wei,
            S::Ding | S::Ji => B::Shen,
            S::Geng => B::Xu,
            S::Xin => B::Hai,
            S::Ren => B::Chou,
            S::Gui => B::Yin,
        })),
        ShenSha::XueTang => Some(one(crate::longevity::birth_branch_of_stem(stem))),
        _ => None,
    };
    targets.into()
}

/// Index of the 三合 frame: 申子辰=0, 寅午戌=1, 巳酉丑=2, 亥卯未=3.
const fn triad(branch: Branch) -> usize {
    match branch {
        Branch::Shen | Branch::Zi | Branch::Chen => 0,
        Branch::Yin | Branch::Wu | Branch::Xu => 1,
        Branch::Si | Branch::You | Branch::Chou => 2,
        Branch::Hai | Branch::Mao | Branch::Wei => 3,
    }
}

/// Index of the season: 亥子丑=0, 寅卯辰=1, 巳午未=2, 申酉戌=3.
const fn season(branch: Branch) -> usize {
    (branch.offset(1).index() / 3) as usize
}

fn branch_targets(kind: ShenSha, branch: Branch) -> &'static [Branch] {
    use Branch as B;
    let by_triad = |table: [Branch; 4]| one(table[triad(branch)]);
    let by_season = |table: [Branch; 4]| one(table[season(branch)]);
    match kind {
        ShenSha::YiMa => by_triad([B::Yin, B::Shen, B::Hai, B::Si]),
        ShenSha::HuaGai => by_triad([B::Chen, B::Xu, B::Chou, B::Wei]),
        ShenSha::TaoHua => by_triad([B::You, B::Mao, B::Wu, B::Zi]),
        ShenSha::JieSha => by_triad([B::Si, B::Hai, B::Yin, B::Shen]),
        ShenSha::WangShen => by_triad([B::Hai, B::Si, B::Shen, B::Yin]),
        ShenSha::HongLuan => one(B::wrapping(3 - branch.index() as i64)),
        ShenSha::TianXi => one(B::wrapping(9 - branch.index() as i64)),
        ShenSha::GuChen => by_season([B::Yin, B::Si, B::Shen, B::Hai]),
        ShenSha::GuaSu => by_season([B::Xu, B::Chou, B::Chen, B::Wei]),
        ShenSha::SangMen => one(branch.offset(2)),
        ShenSha::DiaoKe => one(branch.offset(-2)),
        _ => &[],
    }
}
