use failure::{bail, err_msg, Error};

use pnet::packet::{
    ethernet::{EtherType, EtherTypes, EthernetPacket},
    ipv4::Ipv4Packet,
    vlan::VlanPacket,
    Packet,
};

use crate::ipid::Ipid;

impl Ipid {
    /// Pull the identification field out of a raw ethernet frame, so a
    /// captured packet can feed the classifier directly.
    pub fn extract(frame: &[u8]) -> Result<Self, Error> {
        EthernetPacket::new(frame)
            .ok_or_else(|| err_msg("ethernet packet too short"))
            .and_then(|packet| visit_ethernet(packet.get_ethertype(), packet.payload()))
    }
}

fn visit_ethernet(ethertype: EtherType, payload: &[u8]) -> Result<Ipid, Error> {
    match ethertype {
        EtherTypes::Vlan => VlanPacket::new(payload)
            .ok_or_else(|| err_msg("vlan packet too short"))
            .and_then(visit_vlan),

        EtherTypes::Ipv4 => Ipv4Packet::new(payload)
            .ok_or_else(|| err_msg("ipv4 packet too short"))
            .map(|packet| Ipid(packet.get_identification())),

        // IPv6 headers carry no identification field
        EtherTypes::Ipv6 => bail!("IPv6 packet has no IPID"),

        ty => bail!("unsupported ethernet type: {}", ty),
    }
}

fn visit_vlan(packet: VlanPacket) -> Result<Ipid, Error> {
    visit_ethernet(packet.get_ethertype(), packet.payload())
}
