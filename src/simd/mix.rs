//! Lane selectors for two-input vector mixes.
//!
//! A mix picks each output lane from one of eight named source lanes: `X`, `Y`, `Z`,
//! `W` from the first input and `A`, `B`, `C`, `D` from the second. The four choices
//! are packed into a `u32` selector (3 bits per output lane) that backends receive as
//! a const generic, together with the matching `_MM_SHUFFLE`-style immediate.
//!
//! Pattern recognition runs in `const` context: backends call
//! [`MixPattern::classify`] inside an inline `const` block so the chosen instruction
//! sequence is fixed at monomorphization time.

/// Source lane of a mix, also used as a runtime lane index.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Mix4 {
    X = 0,
    Y = 1,
    Z = 2,
    W = 3,
    A = 4,
    B = 5,
    C = 6,
    D = 7,
}

impl Mix4 {
    /// Lane position inside its source vector (A maps to 0 like X).
    #[inline(always)]
    pub const fn lane(self) -> usize {
        (self as u32 % 4) as usize
    }

    /// `true` for X..W.
    #[inline(always)]
    pub const fn is_input0(self) -> bool {
        (self as u32) < 4
    }

    /// Index into the 8-entry table `[x, y, z, w, a, b, c, d]`.
    #[inline(always)]
    pub const fn table_index(self) -> usize {
        self as usize
    }

    /// Decodes the low three bits of `bits`.
    pub const fn from_bits(bits: u32) -> Mix4 {
        match bits & 0b111 {
            0 => Mix4::X,
            1 => Mix4::Y,
            2 => Mix4::Z,
            3 => Mix4::W,
            4 => Mix4::A,
            5 => Mix4::B,
            6 => Mix4::C,
            _ => Mix4::D,
        }
    }
}

const SELECTOR_BITS: u32 = 3;

/// Packs four lane choices into a mix selector.
pub const fn mix_selector(comp0: Mix4, comp1: Mix4, comp2: Mix4, comp3: Mix4) -> u32 {
    (comp0 as u32)
        | ((comp1 as u32) << SELECTOR_BITS)
        | ((comp2 as u32) << (2 * SELECTOR_BITS))
        | ((comp3 as u32) << (3 * SELECTOR_BITS))
}

/// Unpacks a selector built by [`mix_selector`].
pub const fn decode_selector(selector: u32) -> [Mix4; 4] {
    [
        Mix4::from_bits(selector),
        Mix4::from_bits(selector >> SELECTOR_BITS),
        Mix4::from_bits(selector >> (2 * SELECTOR_BITS)),
        Mix4::from_bits(selector >> (3 * SELECTOR_BITS)),
    ]
}

/// Table indices (0..8) for each output lane of `selector`.
pub const fn selector_indices(selector: u32) -> [usize; 4] {
    let [comp0, comp1, comp2, comp3] = decode_selector(selector);
    [
        comp0.table_index(),
        comp1.table_index(),
        comp2.table_index(),
        comp3.table_index(),
    ]
}

/// Shuffle immediate (2 bits per output lane, lane 0 in the low bits) for the
/// source lane positions of the four choices.
pub const fn mix_shuffle_mask(comp0: Mix4, comp1: Mix4, comp2: Mix4, comp3: Mix4) -> i32 {
    (comp0.lane() | (comp1.lane() << 2) | (comp2.lane() << 4) | (comp3.lane() << 6)) as i32
}

/// Shuffle immediate derived from a packed selector.
pub const fn shuffle_mask_from_selector(selector: u32) -> i32 {
    let [comp0, comp1, comp2, comp3] = decode_selector(selector);
    mix_shuffle_mask(comp0, comp1, comp2, comp3)
}

/// Shape of a mix, used by backends to pick a native instruction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MixPattern {
    /// Every lane comes from input0.
    Input0,
    /// Every lane comes from input1.
    Input1,
    /// x/y lanes from input0, z/w lanes from input1.
    Input0Input1,
    /// x/y lanes from input1, z/w lanes from input0.
    Input1Input0,
    /// `(x, a, y, b)`
    InterleaveLow,
    /// `(a, x, b, y)`
    InterleaveLowSwapped,
    /// `(z, c, w, d)`
    InterleaveHigh,
    /// `(c, z, d, w)`
    InterleaveHighSwapped,
    /// Anything else, resolved lane by lane.
    General,
}

impl MixPattern {
    pub const fn classify(selector: u32) -> MixPattern {
        let [comp0, comp1, comp2, comp3] = decode_selector(selector);

        let low_from_input0 = comp0.is_input0() && comp1.is_input0();
        let high_from_input0 = comp2.is_input0() && comp3.is_input0();
        let low_from_input1 = !comp0.is_input0() && !comp1.is_input0();
        let high_from_input1 = !comp2.is_input0() && !comp3.is_input0();

        if low_from_input0 && high_from_input0 {
            return MixPattern::Input0;
        }
        if low_from_input1 && high_from_input1 {
            return MixPattern::Input1;
        }
        if low_from_input0 && high_from_input1 {
            return MixPattern::Input0Input1;
        }
        if low_from_input1 && high_from_input0 {
            return MixPattern::Input1Input0;
        }

        match (comp0, comp1, comp2, comp3) {
            (Mix4::X, Mix4::A, Mix4::Y, Mix4::B) => MixPattern::InterleaveLow,
            (Mix4::A, Mix4::X, Mix4::B, Mix4::Y) => MixPattern::InterleaveLowSwapped,
            (Mix4::Z, Mix4::C, Mix4::W, Mix4::D) => MixPattern::InterleaveHigh,
            (Mix4::C, Mix4::Z, Mix4::D, Mix4::W) => MixPattern::InterleaveHighSwapped,
            _ => MixPattern::General,
        }
    }
}

/// Compile-time check that `shuffle` was derived from `selector`.
pub const fn is_consistent(selector: u32, shuffle: i32) -> bool {
    selector < (1 << (4 * SELECTOR_BITS)) && shuffle_mask_from_selector(selector) == shuffle
}

/// Per-lane mix over plain arrays.
#[inline(always)]
pub fn mix_lanes(indices: [usize; 4], input0: [f32; 4], input1: [f32; 4]) -> [f32; 4] {
    let table = [
        input0[0], input0[1], input0[2], input0[3], input1[0], input1[1], input1[2], input1[3],
    ];

    [
        table[indices[0]],
        table[indices[1]],
        table[indices[2]],
        table[indices[3]],
    ]
}
