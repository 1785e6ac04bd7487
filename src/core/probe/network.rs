use sysinfo::Networks;

use crate::core::probe::types::InterfaceInfo;
use crate::error::Result;

pub fn collect() -> Result<Vec<InterfaceInfo>> {
    let networks = Networks::new_with_refreshed_list();

    let mut interfaces: Vec<InterfaceInfo> = networks
        .iter()
        .map(|(name, data)| {
            let mac = data.mac_address().0;
            let mac_address = if mac.iter().all(|b| *b == 0) {
                None
            } else {
                Some(
                    mac.iter()
                        .map(|b| format!("{b:02x}"))
                        .collect::<Vec<_>>()
                        .join(":"),
                )
            };

            let ip_addresses = data
                .ip_networks()
                .iter()
                .map(|net| format!("{}/{}", net.addr, net.prefix))
                .collect();

            InterfaceInfo {
                name: name.to_string(),
                mac_address,
                ip_addresses,
                mtu: Some(data.mtu()).filter(|mtu| *mtu > 0),
                total_received_bytes: data.total_received(),
                total_transmitted_bytes: data.total_transmitted(),
                total_packets_received: data.total_packets_received(),
                total_packets_transmitted: data.total_packets_transmitted(),
                total_errors_received: data.total_errors_on_received(),
                total_errors_transmitted: data.total_errors_on_transmitted(),
            }
        })
        .collect();

    // Map iteration order is not stable between runs.
    interfaces.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(interfaces)
}
