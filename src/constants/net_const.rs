//! Socket family, protocol family and socket-level constants.
//!
//! Primary Source References:
//! - glibc 2.22: bits/socket.h
//! - glibc 2.22: bits/sockaddr.h
//! - glibc 2.22: bits/uio.h, bits/select.h

#![allow(non_upper_case_globals)]

// ===== Protocol Families =====
// Source: bits/socket.h
pub const PF_UNSPEC: i32 = 0; // Unspecified
pub const PF_LOCAL: i32 = 1; // Local to host (pipes and file-domain)
pub const PF_UNIX: i32 = PF_LOCAL; // POSIX name for PF_LOCAL
pub const PF_FILE: i32 = PF_LOCAL; // Another non-standard name for PF_LOCAL
pub const PF_INET: i32 = 2; // IP protocol family
pub const PF_AX25: i32 = 3; // Amateur Radio AX.25
pub const PF_IPX: i32 = 4; // Novell Internet Protocol
pub const PF_APPLETALK: i32 = 5; // Appletalk DDP
pub const PF_NETROM: i32 = 6; // Amateur radio NetROM
pub const PF_BRIDGE: i32 = 7; // Multiprotocol bridge
pub const PF_ATMPVC: i32 = 8; // ATM PVCs
pub const PF_X25: i32 = 9; // Reserved for X.25 project
pub const PF_INET6: i32 = 10; // IP version 6
pub const PF_ROSE: i32 = 11; // Amateur Radio X.25 PLP
pub const PF_DECnet: i32 = 12; // Reserved for DECnet project
pub const PF_NETBEUI: i32 = 13; // Reserved for 802.2LLC project
pub const PF_SECURITY: i32 = 14; // Security callback pseudo AF
pub const PF_KEY: i32 = 15; // PF_KEY key management API
pub const PF_NETLINK: i32 = 16;
pub const PF_ROUTE: i32 = PF_NETLINK; // Alias to emulate 4.4BSD
pub const PF_PACKET: i32 = 17; // Packet family
pub const PF_ASH: i32 = 18; // Ash
pub const PF_ECONET: i32 = 19; // Acorn Econet
pub const PF_ATMSVC: i32 = 20; // ATM SVCs
pub const PF_RDS: i32 = 21; // RDS sockets
pub const PF_SNA: i32 = 22; // Linux SNA Project
pub const PF_IRDA: i32 = 23; // IRDA sockets
pub const PF_PPPOX: i32 = 24; // PPPoX sockets
pub const PF_WANPIPE: i32 = 25; // Wanpipe API sockets
pub const PF_LLC: i32 = 26; // Linux LLC
pub const PF_IB: i32 = 27; // Native InfiniBand address
pub const PF_MPLS: i32 = 28; // MPLS
pub const PF_CAN: i32 = 29; // Controller Area Network
pub const PF_TIPC: i32 = 30; // TIPC sockets
pub const PF_BLUETOOTH: i32 = 31; // Bluetooth sockets
pub const PF_IUCV: i32 = 32; // IUCV sockets
pub const PF_RXRPC: i32 = 33; // RxRPC sockets
pub const PF_ISDN: i32 = 34; // mISDN sockets
pub const PF_PHONET: i32 = 35; // Phonet sockets
pub const PF_IEEE802154: i32 = 36; // IEEE 802.15.4 sockets
pub const PF_CAIF: i32 = 37; // CAIF sockets
pub const PF_ALG: i32 = 38; // Algorithm sockets
pub const PF_NFC: i32 = 39; // NFC sockets
pub const PF_VSOCK: i32 = 40; // vSockets
pub const PF_MAX: i32 = 41; // One past the highest family

// ===== Address Families =====
// bits/socket.h defines each AF_* in terms of the matching PF_*.
pub const AF_UNSPEC: i32 = PF_UNSPEC;
pub const AF_LOCAL: i32 = PF_LOCAL;
pub const AF_UNIX: i32 = PF_UNIX;
pub const AF_FILE: i32 = PF_FILE;
pub const AF_INET: i32 = PF_INET;
pub const AF_AX25: i32 = PF_AX25;
pub const AF_IPX: i32 = PF_IPX;
pub const AF_APPLETALK: i32 = PF_APPLETALK;
pub const AF_NETROM: i32 = PF_NETROM;
pub const AF_BRIDGE: i32 = PF_BRIDGE;
pub const AF_ATMPVC: i32 = PF_ATMPVC;
pub const AF_X25: i32 = PF_X25;
pub const AF_INET6: i32 = PF_INET6;
pub const AF_ROSE: i32 = PF_ROSE;
pub const AF_DECnet: i32 = PF_DECnet;
pub const AF_NETBEUI: i32 = PF_NETBEUI;
pub const AF_SECURITY: i32 = PF_SECURITY;
pub const AF_KEY: i32 = PF_KEY;
pub const AF_NETLINK: i32 = PF_NETLINK;
pub const AF_ROUTE: i32 = PF_ROUTE;
pub const AF_PACKET: i32 = PF_PACKET;
pub const AF_ASH: i32 = PF_ASH;
pub const AF_ECONET: i32 = PF_ECONET;
pub const AF_ATMSVC: i32 = PF_ATMSVC;
pub const AF_RDS: i32 = PF_RDS;
pub const AF_SNA: i32 = PF_SNA;
pub const AF_IRDA: i32 = PF_IRDA;
pub const AF_PPPOX: i32 = PF_PPPOX;
pub const AF_WANPIPE: i32 = PF_WANPIPE;
pub const AF_LLC: i32 = PF_LLC;
pub const AF_IB: i32 = PF_IB;
pub const AF_MPLS: i32 = PF_MPLS;
pub const AF_CAN: i32 = PF_CAN;
pub const AF_TIPC: i32 = PF_TIPC;
pub const AF_BLUETOOTH: i32 = PF_BLUETOOTH;
pub const AF_IUCV: i32 = PF_IUCV;
pub const AF_RXRPC: i32 = PF_RXRPC;
pub const AF_ISDN: i32 = PF_ISDN;
pub const AF_PHONET: i32 = PF_PHONET;
pub const AF_IEEE802154: i32 = PF_IEEE802154;
pub const AF_CAIF: i32 = PF_CAIF;
pub const AF_ALG: i32 = PF_ALG;
pub const AF_NFC: i32 = PF_NFC;
pub const AF_VSOCK: i32 = PF_VSOCK;
pub const AF_MAX: i32 = PF_MAX;

// ===== Socket Levels =====
// Levels for setsockopt/getsockopt that are not protocol numbers.
pub const SOL_RAW: i32 = 255;
pub const SOL_DECNET: i32 = 261;
pub const SOL_X25: i32 = 262;
pub const SOL_PACKET: i32 = 263;
pub const SOL_ATM: i32 = 264; // ATM layer (cell level)
pub const SOL_AAL: i32 = 265; // ATM adaptation layer (packet level)
pub const SOL_IRDA: i32 = 266;

// ===== Socket Limits =====
pub const SOMAXCONN: i32 = 128; // Maximum listen() backlog
pub const _SS_SIZE: usize = 128; // Size of struct sockaddr_storage

// ===== I/O Vector and Descriptor-Set Limits =====
// Source: bits/uio.h, bits/select.h
pub const UIO_MAXIOV: i32 = 1024; // Maximum iovecs in one readv/writev
pub const FD_SETSIZE: i32 = 1024; // Descriptors representable in an fd_set
