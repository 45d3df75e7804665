use std::sync::OnceLock;

/// Default module edge in pixels
pub const DEFAULT_MODULE_SIZE: u32 = 4;
/// Default light border width in modules
pub const DEFAULT_QUIET_ZONE: u32 = 4;
/// Largest module edge accepted; larger values are clamped
pub const MAX_MODULE_SIZE: u32 = 64;
/// Largest quiet zone accepted; larger values are clamped
pub const MAX_QUIET_ZONE: u32 = 64;

/// How closely the symbol follows ISO/IEC 18004 where the reference
/// behavior diverges from it.
///
/// Symbols from version 7 up only scan with ISO readers in
/// [`Compliance::Standard`]: without the version information blocks a
/// reader cannot identify the version. Versions 1 to 6 scan in both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compliance {
    /// 8-bit count indicator everywhere, no version information blocks,
    /// 15-cell format copies. Not readable by ISO readers at version 7+.
    #[default]
    Faithful,
    /// 16-bit count indicator at version 10, version information blocks
    /// from version 7, complete second format copy.
    Standard,
}

impl Compliance {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "faithful" => Some(Compliance::Faithful),
            "standard" | "iso" => Some(Compliance::Standard),
            _ => None,
        }
    }
}

/// Encoder settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Pixels per module edge when rendering
    pub module_size: u32,
    /// Light border around the symbol, in modules
    pub quiet_zone: u32,
    /// Standards conformance level
    pub compliance: Compliance,
    /// Score the eight mask candidates on the rayon pool
    pub parallel_masks: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            module_size: DEFAULT_MODULE_SIZE,
            quiet_zone: DEFAULT_QUIET_ZONE,
            compliance: Compliance::Faithful,
            parallel_masks: true,
        }
    }
}

impl EncoderConfig {
    /// Defaults overridden by `QR_MODULE_SIZE`, `QR_QUIET_ZONE`,
    /// `QR_COMPLIANCE` and `QR_PARALLEL_MASKS`. Read once per process.
    pub fn from_env() -> Self {
        Self {
            module_size: module_size(),
            quiet_zone: quiet_zone(),
            compliance: compliance(),
            parallel_masks: parallel_masks(),
        }
    }

    /// Same settings with a different module size, clamped to
    /// `1..=MAX_MODULE_SIZE`
    pub fn with_module_size(mut self, module_size: u32) -> Self {
        self.module_size = clamp_module_size(module_size);
        self
    }

    /// Same settings with a different quiet zone, at most `MAX_QUIET_ZONE`
    pub fn with_quiet_zone(mut self, quiet_zone: u32) -> Self {
        self.quiet_zone = clamp_quiet_zone(quiet_zone);
        self
    }

    /// Same settings with a different compliance level
    pub fn with_compliance(mut self, compliance: Compliance) -> Self {
        self.compliance = compliance;
        self
    }

    /// Same settings with parallel mask scoring switched on or off
    pub fn with_parallel_masks(mut self, parallel: bool) -> Self {
        self.parallel_masks = parallel;
        self
    }
}

pub(crate) fn clamp_module_size(module_size: u32) -> u32 {
    module_size.clamp(1, MAX_MODULE_SIZE)
}

pub(crate) fn clamp_quiet_zone(quiet_zone: u32) -> u32 {
    quiet_zone.min(MAX_QUIET_ZONE)
}

fn parse_env_u32(name: &str, default: u32) -> u32 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(default)
}

fn parse_env_bool_u8(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .map(|v| v != 0)
        .unwrap_or(default)
}

static MODULE_SIZE: OnceLock<u32> = OnceLock::new();

pub(crate) fn module_size() -> u32 {
    *MODULE_SIZE.get_or_init(|| clamp_module_size(parse_env_u32("QR_MODULE_SIZE", DEFAULT_MODULE_SIZE)))
}

static QUIET_ZONE: OnceLock<u32> = OnceLock::new();

pub(crate) fn quiet_zone() -> u32 {
    *QUIET_ZONE.get_or_init(|| clamp_quiet_zone(parse_env_u32("QR_QUIET_ZONE", DEFAULT_QUIET_ZONE)))
}

static COMPLIANCE: OnceLock<Compliance> = OnceLock::new();

pub(crate) fn compliance() -> Compliance {
    *COMPLIANCE.get_or_init(|| {
        std::env::var("QR_COMPLIANCE")
            .ok()
            .and_then(|v| Compliance::parse(&v))
            .unwrap_or_default()
    })
}

static PARALLEL_MASKS: OnceLock<bool> = OnceLock::new();

pub(crate) fn parallel_masks() -> bool {
    *PARALLEL_MASKS.get_or_init(|| parse_env_bool_u8("QR_PARALLEL_MASKS", true))
}
