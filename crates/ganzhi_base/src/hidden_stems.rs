//! Hidden stems (藏干) of each branch, main qi first.

use crate::branch::Branch;
use crate::stem::Stem;

/// Hidden stems of `branch`. The first entry is the main stem (本气).
pub const fn hidden_stems(branch: Branch) -> &'static [Stem] {
    use Stem::*;
    match branch {
        Branch::Zi => &[Gui],
        Branch::Chou => &[Ji, Gui, Xin],
        Branch::Yin => &[Jia, Bing, Wu],
        Branch::Mao => &[Yi],
        Branch::Chen => &[Wu, Yi, Gui],
        Branch::Si => &[Bing, Geng, Wu],
        Branch::Wu => &[Ding, Ji],
        Branch::Wei => &[Ji, Ding, Yi],
        Branch::Shen => &[Geng, Ren, Wu],
        Branch::You => &[Xin],
        Branch::Xu => &[Wu, Xin, Ding],
        Branch::Hai => &[Ren, Jia],
    }
}

/// The main hidden stem of `branch`.
pub const fn main_stem(branch: Branch) -> Stem {
    hidden_stems(branch)[0]
}
