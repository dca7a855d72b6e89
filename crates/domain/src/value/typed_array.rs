//! Typed numeric arrays

/// One element of a typed array, widened to a common representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TypedElement {
    /// Integer element of an 8/16/32-bit array.
    Int(i64),
    /// Floating point element.
    Float(f64),
    /// Element of a `BigInt64Array`.
    BigInt(i64),
    /// Element of a `BigUint64Array`.
    BigUint(u64),
}

/// A fixed-width numeric array.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedArray {
    /// Signed 8-bit elements.
    Int8(Vec<i8>),
    /// Unsigned 8-bit elements.
    Uint8(Vec<u8>),
    /// Unsigned 8-bit elements, clamped on write.
    Uint8Clamped(Vec<u8>),
    /// Signed 16-bit elements.
    Int16(Vec<i16>),
    /// Unsigned 16-bit elements.
    Uint16(Vec<u16>),
    /// Signed 32-bit elements.
    Int32(Vec<i32>),
    /// Unsigned 32-bit elements.
    Uint32(Vec<u32>),
    /// 32-bit floats.
    Float32(Vec<f32>),
    /// 64-bit floats.
    Float64(Vec<f64>),
    /// Signed 64-bit big integers.
    BigInt64(Vec<i64>),
    /// Unsigned 64-bit big integers.
    BigUint64(Vec<u64>),
}

impl TypedArray {
    /// Constructor name of the array kind, e.g. `Uint8Array`.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Int8(_) => "Int8Array",
            Self::Uint8(_) => "Uint8Array",
            Self::Uint8Clamped(_) => "Uint8ClampedArray",
            Self::Int16(_) => "Int16Array",
            Self::Uint16(_) => "Uint16Array",
            Self::Int32(_) => "Int32Array",
            Self::Uint32(_) => "Uint32Array",
            Self::Float32(_) => "Float32Array",
            Self::Float64(_) => "Float64Array",
            Self::BigInt64(_) => "BigInt64Array",
            Self::BigUint64(_) => "BigUint64Array",
        }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Int8(v) => v.len(),
            Self::Uint8(v) | Self::Uint8Clamped(v) => v.len(),
            Self::Int16(v) => v.len(),
            Self::Uint16(v) => v.len(),
            Self::Int32(v) => v.len(),
            Self::Uint32(v) => v.len(),
            Self::Float32(v) => v.len(),
            Self::Float64(v) => v.len(),
            Self::BigInt64(v) => v.len(),
            Self::BigUint64(v) => v.len(),
        }
    }

    /// Returns true if the array has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`.
    #[must_use]
    pub fn element(&self, index: usize) -> Option<TypedElement> {
        match self {
            Self::Int8(v) => v.get(index).map(|&x| TypedElement::Int(x.into())),
            Self::Uint8(v) | Self::Uint8Clamped(v) => {
                v.get(index).map(|&x| TypedElement::Int(x.into()))
            }
            Self::Int16(v) => v.get(index).map(|&x| TypedElement::Int(x.into())),
            Self::Uint16(v) => v.get(index).map(|&x| TypedElement::Int(x.into())),
            Self::Int32(v) => v.get(index).map(|&x| TypedElement::Int(x.into())),
            Self::Uint32(v) => v.get(index).map(|&x| TypedElement::Int(x.into())),
            Self::Float32(v) => v.get(index).map(|&x| TypedElement::Float(x.into())),
            Self::Float64(v) => v.get(index).map(|&x| TypedElement::Float(x)),
            Self::BigInt64(v) => v.get(index).map(|&x| TypedElement::BigInt(x)),
            Self::BigUint64(v) => v.get(index).map(|&x| TypedElement::BigUint(x)),
        }
    }

    /// Iterates over the elements in index order.
    pub fn elements(&self) -> impl Iterator<Item = TypedElement> + '_ {
        (0..self.len()).filter_map(|i| self.element(i))
    }
}
