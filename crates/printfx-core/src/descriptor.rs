//! Per-conversion formatting state.
//!
//! The C source packs this into a 12-byte bitfield union (`xpf_t`) whose
//! three 32-bit words are reinterpreted for bulk reset. Here it is a plain
//! record of named fields; [`Descriptor::reset_conversion`] reproduces the
//! documented "clear the flags word, keep the lengths word" behavior
//! without raw memory reinterpretation.
//!
//! Invariant: `cur_len <= max_len` whenever `max_len > 0`. The logical
//! (would-have-been) output length lives in the sink multiplexer, not
//! here; `cur_len` counts only characters actually emitted.

/// Numeric base of the active conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Radix {
    Bin,
    Oct,
    #[default]
    Dec,
    Hex,
}

impl Radix {
    /// The base as a divisor.
    pub fn value(self) -> u64 {
        match self {
            Radix::Bin => 2,
            Radix::Oct => 8,
            Radix::Dec => 10,
            Radix::Hex => 16,
        }
    }
}

/// Value size class, also the hexdump granularity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum SizeClass {
    Byte,
    Half,
    #[default]
    Word,
    DWord,
}

impl SizeClass {
    /// Width in bytes.
    pub fn bytes(self) -> usize {
        match self {
            SizeClass::Byte => 1,
            SizeClass::Half => 2,
            SizeClass::Word => 4,
            SizeClass::DWord => 8,
        }
    }

    /// The next-larger size class (saturating).
    pub fn widened(self) -> SizeClass {
        match self {
            SizeClass::Byte => SizeClass::Half,
            SizeClass::Half => SizeClass::Word,
            _ => SizeClass::DWord,
        }
    }
}

/// Float sub-format selected by the conversion letter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FloatForm {
    #[default]
    General,
    Fixed,
    Exponential,
    /// Reserved by the original grammar; never produced by the parser.
    Complex,
}

/// All per-conversion state. Stack-allocated, never persisted; one lives
/// in the sink context for the duration of a single formatting call and
/// is reset at each `%` directive.
#[derive(Debug, Clone, Default)]
pub struct Descriptor {
    /// Maximum characters to emit for the whole call. 0 = unlimited.
    pub max_len: u16,
    /// Characters emitted so far (never exceeds `max_len` when capped).
    pub cur_len: u16,

    /// Minimum field width for the active conversion.
    pub min_width: u16,
    /// Decimal digits, string cap, or fractional-second digits.
    pub precision: u16,
    /// Whether `precision` was explicitly given (0 is a valid setting).
    pub precision_set: bool,

    // Flag byte 0 of the original bitfield.
    /// `'` — thousands/nibble grouping, or family-specific separators.
    pub group: bool,
    /// `#` — alternate form.
    pub alt_form: bool,
    /// `-` — left justify; for hexdump, suppress the address column.
    pub left_just: bool,
    /// Upper-case digits/letters, from the case of the conversion letter.
    pub uppercase: bool,
    /// `0` — pad with leading zeros.
    pub zero_pad: bool,
    /// `l`/`ll` — 64-bit value override.
    pub long_long: bool,
    /// A radix-selecting terminator has been seen.
    pub radix_found: bool,
    /// `!` — elapsed time / relative hexdump address.
    pub rel_mode: bool,

    // Flag byte 1.
    pub base: Radix,
    pub size: SizeClass,
    /// The extracted value was negative.
    pub negative: bool,

    // Flag byte 2.
    pub form: FloatForm,
    /// The conversion treats its value as signed.
    pub signed_val: bool,
    /// `+` — always emit a sign; for date/time, append full zone info.
    pub plus: bool,
    /// `*` width — read the field width from the next argument.
    pub arg_width: bool,
    /// `.*` precision — read the precision from the next argument.
    pub arg_precision: bool,

    // Date/time component presence flags (byte 2-3).
    pub yday_ok: bool,
    pub year_ok: bool,
    pub mon_ok: bool,
    pub dow_ok: bool,
    pub mday_ok: bool,
    pub hour_ok: bool,
    pub min_ok: bool,
    pub sec_ok: bool,
    /// Defer zone output (set while rendering the date/time halves of `Z`).
    pub no_zone: bool,
}

impl Descriptor {
    /// Fresh descriptor for a call capped at `max_len` characters
    /// (0 = unlimited).
    pub fn new(max_len: u16) -> Self {
        Descriptor {
            max_len,
            ..Descriptor::default()
        }
    }

    /// Clear every per-conversion field, keeping the length accounting.
    ///
    /// Counterpart of the C engine writing 0 to the packed `flags` and
    /// `limits` words between directives while leaving `lengths` intact.
    pub fn reset_conversion(&mut self) {
        let max_len = self.max_len;
        let cur_len = self.cur_len;
        *self = Descriptor::default();
        self.max_len = max_len;
        self.cur_len = cur_len;
    }

    /// Effective precision for float conversions: explicit value capped
    /// at 15 digits, else the default of 6.
    pub fn float_decimals(&self) -> u16 {
        if self.precision_set {
            self.precision.min(crate::render::MAX_DECIMALS)
        } else {
            crate::render::DEFAULT_DECIMALS
        }
    }
}
