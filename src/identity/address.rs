/// Hardware address selection
///
/// Picks the first non-loopback interface whose link-layer address is
/// present, well formed and not a known placeholder.
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use tracing::debug;

use crate::error::MachineIdError;
use crate::platform::InterfaceSource;

/// Placeholder addresses that say nothing about the machine
///
/// All-zero, broadcast, and the fixed address macOS hands to its
/// internal bridge/NCM adapters.
pub const BLOCKED_ADDRESSES: [&str; 3] = [
    "00:00:00:00:00:00",
    "ff:ff:ff:ff:ff:ff",
    "ac:de:48:00:11:22",
];

static BLOCKED: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| BLOCKED_ADDRESSES.into_iter().collect());

/// EUI-48, EUI-64 and 20-byte IP-over-InfiniBand
const VALID_LENGTHS: [usize; 3] = [6, 8, 20];

/// Link-layer address in canonical form
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HardwareAddress(Vec<u8>);

impl HardwareAddress {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MachineIdError> {
        if !VALID_LENGTHS.contains(&bytes.len()) {
            return Err(MachineIdError::InvalidHardwareAddress(format!(
                "unsupported length {}",
                bytes.len()
            )));
        }
        Ok(Self(bytes.to_vec()))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for HardwareAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for HardwareAddress {
    type Err = MachineIdError;

    /// Parse `aa:bb:..` or `aa-bb-..` (either case)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MachineIdError::InvalidHardwareAddress(s.to_string());

        let separator = if s.contains(':') { ':' } else { '-' };
        let bytes = s
            .split(separator)
            .map(|group| {
                if group.len() != 2 {
                    return Err(invalid());
                }
                u8::from_str_radix(group, 16).map_err(|_| invalid())
            })
            .collect::<Result<Vec<u8>, _>>()?;

        Self::from_bytes(&bytes).map_err(|_| invalid())
    }
}

/// Whether `addr` is one of the known placeholder addresses
pub fn is_blocked(addr: &HardwareAddress) -> bool {
    BLOCKED.contains(addr.to_string().as_str())
}

/// Select the first usable hardware address
///
/// Host enumeration order is kept as is. `None` only means nothing
/// qualified; it is not an error.
pub fn select_address(source: &dyn InterfaceSource) -> Option<HardwareAddress> {
    for iface in source.interfaces() {
        if iface.is_loopback {
            continue;
        }

        let raw = match iface.hardware_addr.as_deref() {
            Some(raw) if !raw.is_empty() => raw,
            _ => continue,
        };

        let addr = match HardwareAddress::from_bytes(raw) {
            Ok(addr) => addr,
            Err(e) => {
                debug!(interface = %iface.name, error = %e, "skipping interface");
                continue;
            }
        };

        if is_blocked(&addr) {
            debug!(interface = %iface.name, %addr, "skipping placeholder address");
            continue;
        }

        return Some(addr);
    }

    None
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::platform::InterfaceRecord;

    /// Fixed interface list, reported in insertion order
    pub(crate) struct FakeInterfaces(pub Vec<InterfaceRecord>);

    impl InterfaceSource for FakeInterfaces {
        fn interfaces(&self) -> Vec<InterfaceRecord> {
            self.0.clone()
        }
    }

    pub(crate) fn iface(name: &str, is_loopback: bool, addr: &str) -> InterfaceRecord {
        let bytes = addr.parse::<HardwareAddress>().unwrap().as_bytes().to_vec();
        InterfaceRecord::new(name, is_loopback, Some(bytes))
    }

    #[test]
    fn test_parse_normalizes() {
        let addr: HardwareAddress = "DE-AD-BE-EF-00-01".parse().unwrap();
        assert_eq!(addr.to_string(), "de:ad:be:ef:00:01");

        let eui64: HardwareAddress = "02:00:5e:10:00:00:00:01".parse().unwrap();
        assert_eq!(eui64.as_bytes().len(), 8);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "de:ad:be:ef:00", "de:ad:be:ef:00:zz", "dead.beef.0001", "d:ad:be:ef:00:01"] {
            assert!(bad.parse::<HardwareAddress>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_from_bytes_lengths() {
        assert!(HardwareAddress::from_bytes(&[0x02; 6]).is_ok());
        assert!(HardwareAddress::from_bytes(&[0x02; 20]).is_ok());
        assert!(HardwareAddress::from_bytes(&[0x02; 4]).is_err());
        assert!(HardwareAddress::from_bytes(&[]).is_err());
    }

    #[test]
    fn test_blocked_addresses_never_selected() {
        for blocked in BLOCKED_ADDRESSES {
            let source = FakeInterfaces(vec![iface("eth0", false, blocked)]);
            assert_eq!(select_address(&source), None, "selected {blocked}");
        }
    }

    #[test]
    fn test_loopback_never_selected() {
        let source = FakeInterfaces(vec![
            iface("lo", true, "11:22:33:44:55:66"),
            iface("lo1", true, "02:42:ac:11:00:02"),
        ]);
        assert_eq!(select_address(&source), None);
    }

    #[test]
    fn test_skips_loopback_and_vendor_default() {
        let source = FakeInterfaces(vec![
            iface("lo0", true, "11:22:33:44:55:66"),
            iface("en5", false, "ac:de:48:00:11:22"),
            iface("en0", false, "de:ad:be:ef:00:01"),
        ]);

        let selected = select_address(&source).unwrap();
        assert_eq!(selected.to_string(), "de:ad:be:ef:00:01");
    }

    #[test]
    fn test_skips_missing_and_malformed() {
        let source = FakeInterfaces(vec![
            InterfaceRecord::new("tun0", false, None),
            InterfaceRecord::new("wg0", false, Some(Vec::new())),
            InterfaceRecord::new("odd0", false, Some(vec![1, 2, 3])),
            iface("eth1", false, "02:42:ac:11:00:02"),
        ]);

        let selected = select_address(&source).unwrap();
        assert_eq!(selected.to_string(), "02:42:ac:11:00:02");
    }

    #[test]
    fn test_first_in_enumeration_order() {
        let source = FakeInterfaces(vec![
            iface("eth1", false, "ff:00:00:00:00:02"),
            iface("eth0", false, "00:00:00:00:00:01"),
        ]);
        assert_eq!(select_address(&source).unwrap().to_string(), "ff:00:00:00:00:02");
    }
}
