//! Script values crossing the VM boundary
//!
//! Arguments borrow from the caller for the duration of a single native
//! call. Return values are owned and handed back to the VM.

use fire_sdk::TESRace;

use crate::error::VmError;

/// A single argument passed from script to a native function
///
/// `None` is the script-side empty value. In an object slot it is an absent
/// handle, in a string slot it reads as the empty string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Argument<'a> {
    None,
    Bool(bool),
    Int(i32),
    Float(f32),
    String(&'a str),
    Race(&'a TESRace),
}

impl<'a> Argument<'a> {
    /// Script type name, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Bool(_) => "Bool",
            Self::Int(_) => "Int",
            Self::Float(_) => "Float",
            Self::String(_) => "String",
            Self::Race(_) => "Race",
        }
    }
}

impl<'a> From<&'a TESRace> for Argument<'a> {
    fn from(race: &'a TESRace) -> Self {
        Self::Race(race)
    }
}

impl<'a> From<Option<&'a TESRace>> for Argument<'a> {
    fn from(race: Option<&'a TESRace>) -> Self {
        race.map_or(Self::None, Self::Race)
    }
}

impl<'a> From<&'a str> for Argument<'a> {
    fn from(value: &'a str) -> Self {
        Self::String(value)
    }
}

/// Positional view over the arguments of one native call
#[derive(Debug, Clone, Copy)]
pub struct Arguments<'s, 'a> {
    args: &'s [Argument<'a>],
}

impl<'s, 'a> Arguments<'s, 'a> {
    pub fn new(args: &'s [Argument<'a>]) -> Self {
        Self { args }
    }

    /// Number of arguments
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Check if no arguments were passed
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Get a raw argument by position
    pub fn get(&self, index: usize) -> Option<&Argument<'a>> {
        self.args.get(index)
    }

    fn require(&self, index: usize) -> Result<&Argument<'a>, VmError> {
        self.args.get(index).ok_or(VmError::ArgumentCount {
            expected: index + 1,
            found: self.args.len(),
        })
    }

    fn mismatch(index: usize, expected: &'static str, found: &Argument<'a>) -> VmError {
        VmError::ArgumentType {
            index,
            expected,
            found: found.type_name(),
        }
    }

    /// Read a race handle. `None` yields an absent handle, not an error.
    pub fn race(&self, index: usize) -> Result<Option<&'a TESRace>, VmError> {
        match self.require(index)? {
            Argument::Race(race) => Ok(Some(*race)),
            Argument::None => Ok(None),
            other => Err(Self::mismatch(index, "Race", other)),
        }
    }

    /// Read a string. `None` reads as the empty string.
    pub fn string(&self, index: usize) -> Result<&'a str, VmError> {
        match self.require(index)? {
            Argument::String(value) => Ok(*value),
            Argument::None => Ok(""),
            other => Err(Self::mismatch(index, "String", other)),
        }
    }

    pub fn int(&self, index: usize) -> Result<i32, VmError> {
        match self.require(index)? {
            Argument::Int(value) => Ok(*value),
            other => Err(Self::mismatch(index, "Int", other)),
        }
    }

    /// Read a float. Ints are widened like the script compiler does.
    pub fn float(&self, index: usize) -> Result<f32, VmError> {
        match self.require(index)? {
            Argument::Float(value) => Ok(*value),
            Argument::Int(value) => Ok(*value as f32),
            other => Err(Self::mismatch(index, "Float", other)),
        }
    }

    pub fn bool(&self, index: usize) -> Result<bool, VmError> {
        match self.require(index)? {
            Argument::Bool(value) => Ok(*value),
            other => Err(Self::mismatch(index, "Bool", other)),
        }
    }
}

/// Value returned from a native function to script
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ReturnValue {
    #[default]
    None,
    Bool(bool),
    Int(i32),
    Float(f32),
    String(String),
    StringArray(Vec<String>),
}

impl ReturnValue {
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_string_array(&self) -> Option<&[String]> {
        match self {
            Self::StringArray(values) => Some(values),
            _ => None,
        }
    }
}

impl From<()> for ReturnValue {
    fn from(_: ()) -> Self {
        Self::None
    }
}

impl From<bool> for ReturnValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for ReturnValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<f32> for ReturnValue {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<String> for ReturnValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for ReturnValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<Vec<String>> for ReturnValue {
    fn from(values: Vec<String>) -> Self {
        Self::StringArray(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_race_argument_none_is_absent_handle() {
        let args = [Argument::None];
        let args = Arguments::new(&args);
        assert_eq!(args.race(0), Ok(None));
    }

    #[test]
    fn test_race_argument_present() {
        let race = TESRace::new(0x13746, "NordRace", Default::default());
        let args = [Argument::from(&race)];
        let args = Arguments::new(&args);
        assert_eq!(args.race(0).unwrap().map(|r| r.form_id), Some(0x13746));
    }

    #[test]
    fn test_string_argument_none_reads_empty() {
        let args = [Argument::None, Argument::String("Alchemy")];
        let args = Arguments::new(&args);
        assert_eq!(args.string(0), Ok(""));
        assert_eq!(args.string(1), Ok("Alchemy"));
    }

    #[test]
    fn test_type_mismatch() {
        let args = [Argument::Int(5)];
        let args = Arguments::new(&args);
        assert_eq!(
            args.race(0),
            Err(VmError::ArgumentType {
                index: 0,
                expected: "Race",
                found: "Int",
            })
        );
    }

    #[test]
    fn test_missing_argument() {
        let args: [Argument; 0] = [];
        let args = Arguments::new(&args);
        assert_eq!(
            args.string(0),
            Err(VmError::ArgumentCount {
                expected: 1,
                found: 0,
            })
        );
    }

    #[test]
    fn test_float_widens_int() {
        let args = [Argument::Int(3)];
        let args = Arguments::new(&args);
        assert_eq!(args.float(0), Ok(3.0));
    }

    #[test]
    fn test_return_conversions() {
        assert_eq!(ReturnValue::from(-1), ReturnValue::Int(-1));
        assert_eq!(ReturnValue::from(-1.0f32).as_float(), Some(-1.0));
        assert_eq!(
            ReturnValue::from(vec!["Block".to_string()]).as_string_array(),
            Some(&["Block".to_string()][..])
        );
        assert_eq!(ReturnValue::from(()), ReturnValue::None);
    }
}
