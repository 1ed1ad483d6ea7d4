use super::{Error, Result};
use crate::{entities::MapPoint, gateways::geocode::GeoCodingGateway};

/// Look up the position of a free-text address.
///
/// `Ok(None)` means the service did not find the address.
pub fn geocode_address<G>(gateway: &G, address: &str) -> Result<Option<MapPoint>>
where
    G: GeoCodingGateway + ?Sized,
{
    let address = address.trim();
    if address.is_empty() {
        return Err(Error::EmptyAddress);
    }
    let pos = gateway.resolve_address_lat_lng(address)?;
    match pos {
        Some(pos) => log::debug!("Resolved address '{address}': {pos}"),
        None => log::debug!("Address '{address}' not found"),
    }
    Ok(pos)
}
