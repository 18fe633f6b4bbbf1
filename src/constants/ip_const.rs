//! IPv4 socket options, address classes and well-known protocol/port
//! numbers.
//!
//! Primary Source References:
//! - glibc 2.22: bits/in.h
//! - glibc 2.22: netinet/in.h

// ===== IPv4 Socket Options =====
// Source: bits/in.h, values for level SOL_IP
pub const SOL_IP: i32 = 0;
pub const IP_TOS: i32 = 1; // Type of service and precedence
pub const IP_TTL: i32 = 2; // Time to live
pub const IP_HDRINCL: i32 = 3; // Header is included with data
pub const IP_OPTIONS: i32 = 4; // IP per-packet options
pub const IP_ROUTER_ALERT: i32 = 5; // Notify transit routers
pub const IP_RECVOPTS: i32 = 6; // Receive all IP options with datagram
pub const IP_RETOPTS: i32 = 7; // Set/get IP per-packet options
pub const IP_PKTINFO: i32 = 8; // Receive packet information
pub const IP_PKTOPTIONS: i32 = 9;
pub const IP_PMTUDISC: i32 = 10; // Path MTU discovery
pub const IP_MTU_DISCOVER: i32 = IP_PMTUDISC;
pub const IP_RECVERR: i32 = 11; // Extended reliable error reporting
pub const IP_RECVTTL: i32 = 12; // Receive TTL with datagram
pub const IP_RECVTOS: i32 = 13; // Receive TOS with datagram
pub const IP_MTU: i32 = 14; // Current path MTU of the socket
pub const IP_FREEBIND: i32 = 15; // Allow binding to nonlocal addresses
pub const IP_IPSEC_POLICY: i32 = 16;
pub const IP_XFRM_POLICY: i32 = 17;
pub const IP_PASSSEC: i32 = 18;
pub const IP_TRANSPARENT: i32 = 19; // Transparent proxying
pub const IP_ORIGDSTADDR: i32 = 20; // Original destination address
pub const IP_RECVORIGDSTADDR: i32 = IP_ORIGDSTADDR;
pub const IP_MINTTL: i32 = 21; // Minimum acceptable TTL on receive
pub const IP_NODEFRAG: i32 = 22;
pub const IP_CHECKSUM: i32 = 23;

// Multicast and source-filter options
pub const IP_MULTICAST_IF: i32 = 32; // Outgoing multicast interface
pub const IP_MULTICAST_TTL: i32 = 33; // TTL for outgoing multicast
pub const IP_MULTICAST_LOOP: i32 = 34; // Loop back outgoing multicast
pub const IP_ADD_MEMBERSHIP: i32 = 35; // Join a multicast group
pub const IP_DROP_MEMBERSHIP: i32 = 36; // Leave a multicast group
pub const IP_UNBLOCK_SOURCE: i32 = 37;
pub const IP_BLOCK_SOURCE: i32 = 38;
pub const IP_ADD_SOURCE_MEMBERSHIP: i32 = 39;
pub const IP_DROP_SOURCE_MEMBERSHIP: i32 = 40;
pub const IP_MSFILTER: i32 = 41;
pub const MCAST_JOIN_GROUP: i32 = 42;
pub const MCAST_BLOCK_SOURCE: i32 = 43;
pub const MCAST_UNBLOCK_SOURCE: i32 = 44;
pub const MCAST_LEAVE_GROUP: i32 = 45;
pub const MCAST_JOIN_SOURCE_GROUP: i32 = 46;
pub const MCAST_LEAVE_SOURCE_GROUP: i32 = 47;
pub const MCAST_MSFILTER: i32 = 48;
pub const IP_MULTICAST_ALL: i32 = 49;
pub const IP_UNICAST_IF: i32 = 50;

// Source-filter modes
pub const MCAST_EXCLUDE: i32 = 0;
pub const MCAST_INCLUDE: i32 = 1;

// IP_MTU_DISCOVER values
pub const IP_PMTUDISC_DONT: i32 = 0; // Never send DF frames
pub const IP_PMTUDISC_WANT: i32 = 1; // Use per-route hints
pub const IP_PMTUDISC_DO: i32 = 2; // Always DF
pub const IP_PMTUDISC_PROBE: i32 = 3; // Ignore dst pmtu
pub const IP_PMTUDISC_INTERFACE: i32 = 4;
pub const IP_PMTUDISC_OMIT: i32 = 5;

// Multicast defaults and limits
pub const IP_DEFAULT_MULTICAST_TTL: i32 = 1;
pub const IP_DEFAULT_MULTICAST_LOOP: i32 = 1;
pub const IP_MAX_MEMBERSHIPS: i32 = 20;

// ===== Address Classes =====
// Source: netinet/in.h.  Masks apply to host-order addresses.
pub const IN_CLASSA_NET: u32 = 0xff00_0000;
pub const IN_CLASSA_NSHIFT: u32 = 24;
pub const IN_CLASSA_HOST: u32 = 0xffff_ffff & !IN_CLASSA_NET;
pub const IN_CLASSA_MAX: u32 = 128;
pub const IN_CLASSB_NET: u32 = 0xffff_0000;
pub const IN_CLASSB_NSHIFT: u32 = 16;
pub const IN_CLASSB_HOST: u32 = 0xffff_ffff & !IN_CLASSB_NET;
pub const IN_CLASSB_MAX: u32 = 65536;
pub const IN_CLASSC_NET: u32 = 0xffff_ff00;
pub const IN_CLASSC_NSHIFT: u32 = 8;
pub const IN_CLASSC_HOST: u32 = 0xffff_ffff & !IN_CLASSC_NET;

pub const IN_LOOPBACKNET: i32 = 127; // Network number of the loopback net

// ===== Well-Known Addresses =====
// Host-order, as netinet/in.h writes them.
pub const INADDR_ANY: u32 = 0x0000_0000; // Accept any incoming address
pub const INADDR_BROADCAST: u32 = 0xffff_ffff; // Send to all hosts
pub const INADDR_NONE: u32 = 0xffff_ffff; // Error return from inet_addr
pub const INADDR_LOOPBACK: u32 = 0x7f00_0001; // 127.0.0.1
pub const INADDR_UNSPEC_GROUP: u32 = 0xe000_0000; // 224.0.0.0
pub const INADDR_ALLHOSTS_GROUP: u32 = 0xe000_0001; // 224.0.0.1
pub const INADDR_ALLRTRS_GROUP: u32 = 0xe000_0002; // 224.0.0.2
pub const INADDR_MAX_LOCAL_GROUP: u32 = 0xe000_00ff; // 224.0.0.255

// ===== Address String Lengths =====
pub const INET_ADDRSTRLEN: i32 = 16;
pub const INET6_ADDRSTRLEN: i32 = 46;

// ===== IP Protocol Numbers =====
// Source: netinet/in.h (the IPPROTO_* enum)
pub const IPPROTO_IP: i32 = 0; // Dummy protocol for TCP
pub const IPPROTO_ICMP: i32 = 1; // Internet Control Message Protocol
pub const IPPROTO_IGMP: i32 = 2; // Internet Group Management Protocol
pub const IPPROTO_IPIP: i32 = 4; // IPIP tunnels
pub const IPPROTO_TCP: i32 = 6; // Transmission Control Protocol
pub const IPPROTO_EGP: i32 = 8; // Exterior Gateway Protocol
pub const IPPROTO_PUP: i32 = 12; // PUP protocol
pub const IPPROTO_UDP: i32 = 17; // User Datagram Protocol
pub const IPPROTO_IDP: i32 = 22; // XNS IDP protocol
pub const IPPROTO_TP: i32 = 29; // SO Transport Protocol Class 4
pub const IPPROTO_DCCP: i32 = 33; // Datagram Congestion Control Protocol
pub const IPPROTO_IPV6: i32 = 41; // IPv6 header
pub const IPPROTO_RSVP: i32 = 46; // Reservation Protocol
pub const IPPROTO_GRE: i32 = 47; // General Routing Encapsulation
pub const IPPROTO_ESP: i32 = 50; // Encapsulating security payload
pub const IPPROTO_AH: i32 = 51; // Authentication header
pub const IPPROTO_MTP: i32 = 92; // Multicast Transport Protocol
pub const IPPROTO_BEETPH: i32 = 94; // IP option pseudo header for BEET
pub const IPPROTO_ENCAP: i32 = 98; // Encapsulation header
pub const IPPROTO_PIM: i32 = 103; // Protocol Independent Multicast
pub const IPPROTO_COMP: i32 = 108; // Compression Header Protocol
pub const IPPROTO_SCTP: i32 = 132; // Stream Control Transmission Protocol
pub const IPPROTO_UDPLITE: i32 = 136; // UDP-Lite protocol
pub const IPPROTO_RAW: i32 = 255; // Raw IP packets
pub const IPPROTO_MAX: i32 = 256;

// IPv6 extension header numbers, same numbering space
pub const IPPROTO_HOPOPTS: i32 = 0; // IPv6 Hop-by-Hop options
pub const IPPROTO_ROUTING: i32 = 43; // IPv6 routing header
pub const IPPROTO_FRAGMENT: i32 = 44; // IPv6 fragmentation header
pub const IPPROTO_ICMPV6: i32 = 58; // ICMPv6
pub const IPPROTO_NONE: i32 = 59; // IPv6 no next header
pub const IPPROTO_DSTOPTS: i32 = 60; // IPv6 destination options
pub const IPPROTO_MH: i32 = 135; // IPv6 mobility header

// ===== Standard Port Numbers =====
// Source: netinet/in.h (the IPPORT_* enum)
pub const IPPORT_ECHO: i32 = 7;
pub const IPPORT_DISCARD: i32 = 9;
pub const IPPORT_SYSTAT: i32 = 11;
pub const IPPORT_DAYTIME: i32 = 13;
pub const IPPORT_NETSTAT: i32 = 15;
pub const IPPORT_FTP: i32 = 21;
pub const IPPORT_TELNET: i32 = 23;
pub const IPPORT_SMTP: i32 = 25;
pub const IPPORT_TIMESERVER: i32 = 37;
pub const IPPORT_NAMESERVER: i32 = 42;
pub const IPPORT_WHOIS: i32 = 43;
pub const IPPORT_MTP: i32 = 57;
pub const IPPORT_TFTP: i32 = 69;
pub const IPPORT_RJE: i32 = 77;
pub const IPPORT_FINGER: i32 = 79;
pub const IPPORT_TTYLINK: i32 = 87;
pub const IPPORT_SUPDUP: i32 = 95;
pub const IPPORT_EXECSERVER: i32 = 512; // rexecd
pub const IPPORT_BIFFUDP: i32 = 512; // UDP side
pub const IPPORT_LOGINSERVER: i32 = 513; // rlogind
pub const IPPORT_WHOSERVER: i32 = 513; // UDP side
pub const IPPORT_CMDSERVER: i32 = 514; // rshd
pub const IPPORT_EFSSERVER: i32 = 520;
pub const IPPORT_ROUTESERVER: i32 = 520; // UDP side
pub const IPPORT_RESERVED: i32 = 1024; // Ports below this are reserved
pub const IPPORT_USERRESERVED: i32 = 5000;
