//! Parameter Storage Types
//!
//! Fixed-capacity key/value store for session configuration.

use super::error::ParameterError;
use heapless::index_map::FnvIndexMap;
use heapless::String;

/// Maximum parameter name length
pub const PARAM_NAME_LEN: usize = 16;

/// Maximum number of parameters (power of two, required by the index map)
pub const MAX_PARAMS: usize = 16;

/// Parameter value types
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    Bool(bool),
    Int(i32),
    Float(f32),
}

impl ParamValue {
    fn same_kind(&self, other: &ParamValue) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other)
    }
}

type ParamName = String<PARAM_NAME_LEN>;

fn param_name(name: &str) -> Option<ParamName> {
    let mut key = ParamName::new();
    key.push_str(name).ok()?;
    Some(key)
}

/// Parameter store
///
/// Values are typed at registration; `set` must keep the same type.
pub struct ParameterStore {
    parameters: FnvIndexMap<ParamName, ParamValue, MAX_PARAMS>,
}

impl ParameterStore {
    pub fn new() -> Self {
        Self {
            parameters: FnvIndexMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.parameters.get(&param_name(name)?)
    }

    /// Set an existing parameter
    pub fn set(&mut self, name: &str, value: ParamValue) -> Result<(), ParameterError> {
        let key = param_name(name).ok_or(ParameterError::UnknownParameter)?;

        let current = self
            .parameters
            .get(&key)
            .ok_or(ParameterError::UnknownParameter)?;
        if !current.same_kind(&value) {
            return Err(ParameterError::TypeMismatch);
        }

        self.parameters
            .insert(key, value)
            .map_err(|_| ParameterError::StoreFull)?;
        Ok(())
    }

    /// Register a parameter with its default value
    ///
    /// Registering an existing name is a no-op; the current value is kept.
    pub fn register(&mut self, name: &str, default_value: ParamValue) -> Result<(), ParameterError> {
        let key = param_name(name).ok_or(ParameterError::UnknownParameter)?;
        if self.parameters.contains_key(&key) {
            return Ok(());
        }

        self.parameters
            .insert(key, default_value)
            .map_err(|_| ParameterError::StoreFull)?;
        Ok(())
    }

    /// Registered parameter count
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut store = ParameterStore::new();
        store.register("TEST_F", ParamValue::Float(1.5)).unwrap();
        assert_eq!(store.get("TEST_F"), Some(&ParamValue::Float(1.5)));
        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut store = ParameterStore::new();
        store.register("TEST_I", ParamValue::Int(1)).unwrap();
        store.set("TEST_I", ParamValue::Int(7)).unwrap();
        store.register("TEST_I", ParamValue::Int(1)).unwrap();
        assert_eq!(store.get("TEST_I"), Some(&ParamValue::Int(7)));
    }

    #[test]
    fn test_set_unknown() {
        let mut store = ParameterStore::new();
        assert_eq!(
            store.set("NOPE", ParamValue::Int(1)),
            Err(ParameterError::UnknownParameter)
        );
    }

    #[test]
    fn test_set_type_mismatch() {
        let mut store = ParameterStore::new();
        store.register("TEST_B", ParamValue::Bool(false)).unwrap();
        assert_eq!(
            store.set("TEST_B", ParamValue::Int(1)),
            Err(ParameterError::TypeMismatch)
        );
        assert_eq!(store.get("TEST_B"), Some(&ParamValue::Bool(false)));
    }

    #[test]
    fn test_name_too_long() {
        let mut store = ParameterStore::new();
        assert_eq!(
            store.register("THIS_NAME_IS_WAY_TOO_LONG", ParamValue::Int(0)),
            Err(ParameterError::UnknownParameter)
        );
    }

    #[test]
    fn test_store_full() {
        let mut store = ParameterStore::new();
        let names = [
            "P00", "P01", "P02", "P03", "P04", "P05", "P06", "P07", "P08", "P09", "P10", "P11",
            "P12", "P13", "P14", "P15",
        ];
        for name in names {
            store.register(name, ParamValue::Int(0)).unwrap();
        }
        assert_eq!(
            store.register("P16", ParamValue::Int(0)),
            Err(ParameterError::StoreFull)
        );
    }
}
