//! IPv6 socket options.
//!
//! Primary Source References:
//! - glibc 2.22: bits/in.h

// ===== IPv6 Socket Options =====
// Values for levels SOL_IPV6 / SOL_ICMPV6.
pub const SOL_IPV6: i32 = 41;
pub const SOL_ICMPV6: i32 = 58;

pub const IPV6_ADDRFORM: i32 = 1; // Convert socket between v4 and v6
pub const IPV6_2292PKTINFO: i32 = 2; // Obsolete RFC 2292 options
pub const IPV6_2292HOPOPTS: i32 = 3;
pub const IPV6_2292DSTOPTS: i32 = 4;
pub const IPV6_2292RTHDR: i32 = 5;
pub const IPV6_2292PKTOPTIONS: i32 = 6;
pub const IPV6_CHECKSUM: i32 = 7; // Checksum offset for raw sockets
pub const IPV6_2292HOPLIMIT: i32 = 8;
pub const IPV6_NEXTHOP: i32 = 9;
pub const IPV6_AUTHHDR: i32 = 10;
pub const IPV6_UNICAST_HOPS: i32 = 16; // Hop limit for unicast
pub const IPV6_MULTICAST_IF: i32 = 17; // Outgoing multicast interface
pub const IPV6_MULTICAST_HOPS: i32 = 18; // Hop limit for multicast
pub const IPV6_MULTICAST_LOOP: i32 = 19; // Loop back outgoing multicast
pub const IPV6_JOIN_GROUP: i32 = 20; // Join a multicast group
pub const IPV6_LEAVE_GROUP: i32 = 21; // Leave a multicast group
pub const IPV6_ROUTER_ALERT: i32 = 22;
pub const IPV6_MTU_DISCOVER: i32 = 23;
pub const IPV6_MTU: i32 = 24;
pub const IPV6_RECVERR: i32 = 25;
pub const IPV6_V6ONLY: i32 = 26; // Restrict socket to IPv6 only
pub const IPV6_JOIN_ANYCAST: i32 = 27;
pub const IPV6_LEAVE_ANYCAST: i32 = 28;
pub const IPV6_IPSEC_POLICY: i32 = 34;
pub const IPV6_XFRM_POLICY: i32 = 35;

// RFC 3542 advanced API options
pub const IPV6_RECVPKTINFO: i32 = 49;
pub const IPV6_PKTINFO: i32 = 50;
pub const IPV6_RECVHOPLIMIT: i32 = 51;
pub const IPV6_HOPLIMIT: i32 = 52;
pub const IPV6_RECVHOPOPTS: i32 = 53;
pub const IPV6_HOPOPTS: i32 = 54;
pub const IPV6_RTHDRDSTOPTS: i32 = 55;
pub const IPV6_RECVRTHDR: i32 = 56;
pub const IPV6_RTHDR: i32 = 57;
pub const IPV6_RECVDSTOPTS: i32 = 58;
pub const IPV6_DSTOPTS: i32 = 59;
pub const IPV6_RECVPATHMTU: i32 = 60;
pub const IPV6_PATHMTU: i32 = 61;
pub const IPV6_DONTFRAG: i32 = 62;
pub const IPV6_RECVTCLASS: i32 = 66;
pub const IPV6_TCLASS: i32 = 67; // Traffic class

// Obsolete synonyms
pub const IPV6_ADD_MEMBERSHIP: i32 = IPV6_JOIN_GROUP;
pub const IPV6_DROP_MEMBERSHIP: i32 = IPV6_LEAVE_GROUP;
pub const IPV6_RXHOPOPTS: i32 = IPV6_HOPOPTS;
pub const IPV6_RXDSTOPTS: i32 = IPV6_DSTOPTS;

// IPV6_MTU_DISCOVER values
pub const IPV6_PMTUDISC_DONT: i32 = 0; // Never send DF frames
pub const IPV6_PMTUDISC_WANT: i32 = 1; // Use per-route hints
pub const IPV6_PMTUDISC_DO: i32 = 2; // Always DF
pub const IPV6_PMTUDISC_PROBE: i32 = 3; // Ignore dst pmtu
pub const IPV6_PMTUDISC_INTERFACE: i32 = 4;
pub const IPV6_PMTUDISC_OMIT: i32 = 5;

// Routing header options
pub const IPV6_RTHDR_LOOSE: i32 = 0; // Hop need not be a neighbor
pub const IPV6_RTHDR_STRICT: i32 = 1; // Hop must be a neighbor
pub const IPV6_RTHDR_TYPE_0: i32 = 0; // IPv6 routing header type 0
