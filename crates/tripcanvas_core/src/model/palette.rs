//! Paired display color tokens for activities.

/// One background/text token pair. The two tokens are only meaningful together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VibePalette {
    pub name: &'static str,
    pub bg: &'static str,
    pub text: &'static str,
}

impl VibePalette {
    pub const SUNRISE: Self = Self::new("Sunrise", "bg-orange-300", "text-orange-950");
    pub const DAYDREAM: Self = Self::new("Daydream", "bg-sky-300", "text-sky-950");
    pub const MATCHA: Self = Self::new("Matcha", "bg-lime-300", "text-lime-950");
    pub const TWILIGHT: Self = Self::new("Twilight", "bg-violet-300", "text-violet-950");
    pub const SAKURA: Self = Self::new("Sakura", "bg-rose-300", "text-rose-950");
    pub const OCEAN: Self = Self::new("Ocean", "bg-teal-300", "text-teal-950");
    pub const HONEY: Self = Self::new("Honey", "bg-amber-300", "text-amber-950");
    pub const FOREST: Self = Self::new("Forest", "bg-emerald-300", "text-emerald-950");
    pub const DEEP: Self = Self::new("Deep", "bg-indigo-300", "text-indigo-950");
    pub const MINIMAL: Self = Self::new("Minimal", "bg-stone-300", "text-stone-900");

    /// Every palette offered by activity editors, in picker order.
    pub const ALL: [Self; 10] = [
        Self::SUNRISE,
        Self::DAYDREAM,
        Self::MATCHA,
        Self::TWILIGHT,
        Self::SAKURA,
        Self::OCEAN,
        Self::HONEY,
        Self::FOREST,
        Self::DEEP,
        Self::MINIMAL,
    ];

    const fn new(name: &'static str, bg: &'static str, text: &'static str) -> Self {
        Self { name, bg, text }
    }

    /// Recovers the full pair from a stored background token.
    pub fn from_bg(bg: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|palette| palette.bg == bg)
    }
}

impl Default for VibePalette {
    fn default() -> Self {
        Self::MINIMAL
    }
}
