/// Machine identifier calculation
use uuid::Uuid;

use super::address::select_address;
use super::hash::sha256_hex;
use crate::platform::{InterfaceSource, SystemInterfaces};

/// Where a freshly computed identifier came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// SHA-256 of a selected hardware address
    HardwareAddress,
    /// Random UUID, no usable hardware address
    Random,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub value: String,
    pub origin: Origin,
}

/// Derives an identifier from the network hardware, or a random one
pub struct IdentifierCalculator {
    interfaces: Box<dyn InterfaceSource>,
}

impl IdentifierCalculator {
    pub fn new(interfaces: Box<dyn InterfaceSource>) -> Self {
        Self { interfaces }
    }

    pub fn system() -> Self {
        Self::new(Box::new(SystemInterfaces))
    }

    /// Hash of the first usable hardware address, else a fresh UUID
    ///
    /// The hardware path is deterministic; the random path yields a new
    /// value on every call.
    pub fn calculate(&self) -> Identifier {
        match select_address(self.interfaces.as_ref()) {
            Some(addr) => Identifier {
                value: sha256_hex(&addr.to_string()),
                origin: Origin::HardwareAddress,
            },
            None => Identifier {
                value: random_identifier(),
                origin: Origin::Random,
            },
        }
    }
}

/// Canonical hyphenated UUID v4
pub fn random_identifier() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::address::tests::{FakeInterfaces, iface};

    fn assert_uuid_shape(value: &str) {
        assert_eq!(value.len(), 36);
        let parsed = Uuid::parse_str(value).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(parsed.hyphenated().to_string(), value);
    }

    #[test]
    fn test_hardware_identifier_is_deterministic() {
        let calc = IdentifierCalculator::new(Box::new(FakeInterfaces(vec![
            iface("lo", true, "11:22:33:44:55:66"),
            iface("en0", false, "DE:AD:BE:EF:00:01"),
        ])));

        let first = calc.calculate();
        assert_eq!(first.origin, Origin::HardwareAddress);
        assert_eq!(
            first.value,
            "2e53a39e3ad52c92f591ba7785461697905edf7753ce84e3bc989f36be8233a8"
        );
        assert_eq!(calc.calculate(), first);
    }

    #[test]
    fn test_random_fallback() {
        let calc = IdentifierCalculator::new(Box::new(FakeInterfaces(vec![
            iface("lo", true, "11:22:33:44:55:66"),
            iface("bridge0", false, "ac:de:48:00:11:22"),
        ])));

        let first = calc.calculate();
        let second = calc.calculate();

        assert_eq!(first.origin, Origin::Random);
        assert_uuid_shape(&first.value);
        assert_uuid_shape(&second.value);
        assert_ne!(first.value, second.value);
    }

    #[test]
    fn test_no_interfaces() {
        let calc = IdentifierCalculator::new(Box::new(FakeInterfaces(Vec::new())));
        assert_eq!(calc.calculate().origin, Origin::Random);
    }
}
