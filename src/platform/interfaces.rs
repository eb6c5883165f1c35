/// Network interface enumeration
#[cfg(not(windows))]
use pnet::datalink;

/// Snapshot of a single network interface as seen by the process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceRecord {
    pub name: String,
    pub is_loopback: bool,
    /// Raw link-layer address, if the interface has one
    pub hardware_addr: Option<Vec<u8>>,
}

impl InterfaceRecord {
    pub fn new(name: impl Into<String>, is_loopback: bool, hardware_addr: Option<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            is_loopback,
            hardware_addr,
        }
    }
}

/// Source of network interfaces, in the order the host reports them
pub trait InterfaceSource: Send + Sync {
    fn interfaces(&self) -> Vec<InterfaceRecord>;
}

/// Live interface source backed by the OS datalink layer
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemInterfaces;

#[cfg(not(windows))]
impl InterfaceSource for SystemInterfaces {
    fn interfaces(&self) -> Vec<InterfaceRecord> {
        // No sorting: enumeration order is whatever the platform gives us
        datalink::interfaces()
            .into_iter()
            .map(|iface| {
                let hardware_addr = iface
                    .mac
                    .map(|m| vec![m.0, m.1, m.2, m.3, m.4, m.5]);
                InterfaceRecord {
                    is_loopback: iface.is_loopback(),
                    name: iface.name,
                    hardware_addr,
                }
            })
            .collect()
    }
}

/// Adapter enumeration through GetAdaptersAddresses
///
/// The loopback pseudo-interface has no physical address, so it never
/// shows up here.
#[cfg(windows)]
impl InterfaceSource for SystemInterfaces {
    fn interfaces(&self) -> Vec<InterfaceRecord> {
        let adapters = match mac_address::MacAddressIterator::new() {
            Ok(adapters) => adapters,
            Err(e) => {
                tracing::debug!(error = %e, "could not enumerate network adapters");
                return Vec::new();
            }
        };

        adapters
            .enumerate()
            .map(|(i, mac)| {
                InterfaceRecord::new(format!("adapter{i}"), false, Some(mac.bytes().to_vec()))
            })
            .collect()
    }
}
