//! Name → value registry over the constant bindings.
//!
//! The registry is built once, on first access, and never mutated
//! afterwards; every lookup after that point is a plain read on shared
//! immutable data, so no locking is involved.  Entries keep their
//! registration order (the order of the source headers), which makes
//! reverse lookup deterministic when several names share a value.

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;
use log::debug;
use serde::Serialize;

use crate::constants::*;

/// A constant's value.  The headers bind both signed ints and unsigned
/// masks/addresses; `Uint` carries the ones a signed 64-bit cannot
/// (`UINT64_MAX`) or that the header types as unsigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConstValue {
    Int(i64),
    Uint(u64),
}

impl ConstValue {
    /// Whether this value equals `v` under the usual widening rules.
    pub fn matches(self, v: i64) -> bool {
        match self {
            ConstValue::Int(x) => x == v,
            ConstValue::Uint(x) => v >= 0 && x == v as u64,
        }
    }
}

impl fmt::Display for ConstValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstValue::Int(v) => write!(f, "{}", v),
            ConstValue::Uint(v) => write!(f, "{}", v),
        }
    }
}

/// Informal grouping of a binding, following the source header it came
/// from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    SocketFamily,
    SocketLevel,
    IpOption,
    Ipv6Option,
    AddrClass,
    Protocol,
    Port,
    ClockId,
    Timex,
    PthreadSize,
    ByteOrder,
    IntLimit,
    Limit,
}

/// One resolved binding: a name, its value for the build target, and its
/// grouping.
#[derive(Debug, Clone, Serialize)]
pub struct ConstDef {
    pub name: &'static str,
    pub value: ConstValue,
    pub category: Category,
}

/// Lookup failure: the name is not bound for this platform variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownConstant {
    name: String,
}

impl UnknownConstant {
    /// The name that missed.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for UnknownConstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown constant name: {}", self.name)
    }
}

impl std::error::Error for UnknownConstant {}

// Registers bindings under their own identifier, so the table name
// always matches the `pub const` item.
macro_rules! reg {
    ($v:ident, $cat:expr, int: $($name:ident),+ $(,)?) => {
        $($v.push(ConstDef {
            name: stringify!($name),
            value: ConstValue::Int($name as i64),
            category: $cat,
        });)+
    };
    ($v:ident, $cat:expr, uint: $($name:ident),+ $(,)?) => {
        $($v.push(ConstDef {
            name: stringify!($name),
            value: ConstValue::Uint($name as u64),
            category: $cat,
        });)+
    };
}

fn build_entries() -> Vec<ConstDef> {
    let mut v = Vec::with_capacity(384);

    // stdint.h
    reg!(v, Category::IntLimit, int:
        INT8_MIN, INT16_MIN, INT32_MIN, INT64_MIN,
        INT8_MAX, INT16_MAX, INT32_MAX, INT64_MAX,
    );
    reg!(v, Category::IntLimit, uint:
        UINT8_MAX, UINT16_MAX, UINT32_MAX, UINT64_MAX,
    );

    // bits/time.h, time.h
    reg!(v, Category::ClockId, int:
        CLOCK_REALTIME, CLOCK_MONOTONIC, CLOCK_PROCESS_CPUTIME_ID,
        CLOCK_THREAD_CPUTIME_ID, CLOCK_MONOTONIC_RAW, CLOCK_REALTIME_COARSE,
        CLOCK_MONOTONIC_COARSE, CLOCK_BOOTTIME, CLOCK_REALTIME_ALARM,
        CLOCK_BOOTTIME_ALARM, CLOCK_TAI, TIMER_ABSTIME, TIME_UTC,
    );

    // bits/timex.h
    reg!(v, Category::Timex, int:
        ADJ_OFFSET, ADJ_FREQUENCY, ADJ_MAXERROR, ADJ_ESTERROR, ADJ_STATUS,
        ADJ_TIMECONST, ADJ_TAI, ADJ_SETOFFSET, ADJ_MICRO, ADJ_NANO,
        ADJ_TICK, ADJ_OFFSET_SINGLESHOT, ADJ_OFFSET_SS_READ,
        MOD_OFFSET, MOD_FREQUENCY, MOD_MAXERROR, MOD_ESTERROR, MOD_STATUS,
        MOD_TIMECONST, MOD_CLKB, MOD_CLKA, MOD_TAI, MOD_MICRO, MOD_NANO,
        STA_PLL, STA_PPSFREQ, STA_PPSTIME, STA_FLL, STA_INS, STA_DEL,
        STA_UNSYNC, STA_FREQHOLD, STA_PPSSIGNAL, STA_PPSJITTER,
        STA_PPSWANDER, STA_PPSERROR, STA_CLOCKERR, STA_NANO, STA_MODE,
        STA_CLK, STA_RONLY,
    );

    // endian.h
    reg!(v, Category::ByteOrder, int:
        LITTLE_ENDIAN, BIG_ENDIAN, PDP_ENDIAN, BYTE_ORDER, FLOAT_WORD_ORDER,
    );

    // bits/wordsize.h, bits/pthreadtypes.h
    reg!(v, Category::Limit, uint: __WORDSIZE);
    reg!(v, Category::PthreadSize, uint:
        __SIZEOF_PTHREAD_ATTR_T, __SIZEOF_PTHREAD_MUTEX_T,
        __SIZEOF_PTHREAD_MUTEXATTR_T, __SIZEOF_PTHREAD_COND_T,
        __SIZEOF_PTHREAD_CONDATTR_T, __SIZEOF_PTHREAD_RWLOCK_T,
        __SIZEOF_PTHREAD_RWLOCKATTR_T, __SIZEOF_PTHREAD_BARRIER_T,
        __SIZEOF_PTHREAD_BARRIERATTR_T,
    );

    // bits/uio.h, bits/select.h
    reg!(v, Category::Limit, int: UIO_MAXIOV, FD_SETSIZE);

    // bits/socket.h
    reg!(v, Category::SocketFamily, int:
        PF_UNSPEC, PF_LOCAL, PF_UNIX, PF_FILE, PF_INET, PF_AX25, PF_IPX,
        PF_APPLETALK, PF_NETROM, PF_BRIDGE, PF_ATMPVC, PF_X25, PF_INET6,
        PF_ROSE, PF_DECnet, PF_NETBEUI, PF_SECURITY, PF_KEY, PF_NETLINK,
        PF_ROUTE, PF_PACKET, PF_ASH, PF_ECONET, PF_ATMSVC, PF_RDS, PF_SNA,
        PF_IRDA, PF_PPPOX, PF_WANPIPE, PF_LLC, PF_IB, PF_MPLS, PF_CAN,
        PF_TIPC, PF_BLUETOOTH, PF_IUCV, PF_RXRPC, PF_ISDN, PF_PHONET,
        PF_IEEE802154, PF_CAIF, PF_ALG, PF_NFC, PF_VSOCK, PF_MAX,
        AF_UNSPEC, AF_LOCAL, AF_UNIX, AF_FILE, AF_INET, AF_AX25, AF_IPX,
        AF_APPLETALK, AF_NETROM, AF_BRIDGE, AF_ATMPVC, AF_X25, AF_INET6,
        AF_ROSE, AF_DECnet, AF_NETBEUI, AF_SECURITY, AF_KEY, AF_NETLINK,
        AF_ROUTE, AF_PACKET, AF_ASH, AF_ECONET, AF_ATMSVC, AF_RDS, AF_SNA,
        AF_IRDA, AF_PPPOX, AF_WANPIPE, AF_LLC, AF_IB, AF_MPLS, AF_CAN,
        AF_TIPC, AF_BLUETOOTH, AF_IUCV, AF_RXRPC, AF_ISDN, AF_PHONET,
        AF_IEEE802154, AF_CAIF, AF_ALG, AF_NFC, AF_VSOCK, AF_MAX,
    );
    reg!(v, Category::SocketLevel, int:
        SOL_RAW, SOL_DECNET, SOL_X25, SOL_PACKET, SOL_ATM, SOL_AAL,
        SOL_IRDA,
    );
    reg!(v, Category::Limit, int: SOMAXCONN);
    reg!(v, Category::Limit, uint: _SS_SIZE);

    // bits/in.h
    reg!(v, Category::SocketLevel, int: SOL_IP);
    reg!(v, Category::IpOption, int:
        IP_TOS, IP_TTL, IP_HDRINCL, IP_OPTIONS, IP_ROUTER_ALERT,
        IP_RECVOPTS, IP_RETOPTS, IP_PKTINFO, IP_PKTOPTIONS, IP_PMTUDISC,
        IP_MTU_DISCOVER, IP_RECVERR, IP_RECVTTL, IP_RECVTOS, IP_MTU,
        IP_FREEBIND, IP_IPSEC_POLICY, IP_XFRM_POLICY, IP_PASSSEC,
        IP_TRANSPARENT, IP_ORIGDSTADDR, IP_RECVORIGDSTADDR, IP_MINTTL,
        IP_NODEFRAG, IP_CHECKSUM, IP_MULTICAST_IF, IP_MULTICAST_TTL,
        IP_MULTICAST_LOOP, IP_ADD_MEMBERSHIP, IP_DROP_MEMBERSHIP,
        IP_UNBLOCK_SOURCE, IP_BLOCK_SOURCE, IP_ADD_SOURCE_MEMBERSHIP,
        IP_DROP_SOURCE_MEMBERSHIP, IP_MSFILTER, MCAST_JOIN_GROUP,
        MCAST_BLOCK_SOURCE, MCAST_UNBLOCK_SOURCE, MCAST_LEAVE_GROUP,
        MCAST_JOIN_SOURCE_GROUP, MCAST_LEAVE_SOURCE_GROUP, MCAST_MSFILTER,
        IP_MULTICAST_ALL, IP_UNICAST_IF, MCAST_EXCLUDE, MCAST_INCLUDE,
        IP_PMTUDISC_DONT, IP_PMTUDISC_WANT, IP_PMTUDISC_DO,
        IP_PMTUDISC_PROBE, IP_PMTUDISC_INTERFACE, IP_PMTUDISC_OMIT,
        IP_DEFAULT_MULTICAST_TTL, IP_DEFAULT_MULTICAST_LOOP,
        IP_MAX_MEMBERSHIPS,
    );

    // bits/in.h IPv6 options
    reg!(v, Category::SocketLevel, int: SOL_IPV6, SOL_ICMPV6);
    reg!(v, Category::Ipv6Option, int:
        IPV6_ADDRFORM, IPV6_2292PKTINFO, IPV6_2292HOPOPTS, IPV6_2292DSTOPTS,
        IPV6_2292RTHDR, IPV6_2292PKTOPTIONS, IPV6_CHECKSUM,
        IPV6_2292HOPLIMIT, IPV6_NEXTHOP, IPV6_AUTHHDR, IPV6_UNICAST_HOPS,
        IPV6_MULTICAST_IF, IPV6_MULTICAST_HOPS, IPV6_MULTICAST_LOOP,
        IPV6_JOIN_GROUP, IPV6_LEAVE_GROUP, IPV6_ROUTER_ALERT,
        IPV6_MTU_DISCOVER, IPV6_MTU, IPV6_RECVERR, IPV6_V6ONLY,
        IPV6_JOIN_ANYCAST, IPV6_LEAVE_ANYCAST, IPV6_IPSEC_POLICY,
        IPV6_XFRM_POLICY, IPV6_RECVPKTINFO, IPV6_PKTINFO,
        IPV6_RECVHOPLIMIT, IPV6_HOPLIMIT, IPV6_RECVHOPOPTS, IPV6_HOPOPTS,
        IPV6_RTHDRDSTOPTS, IPV6_RECVRTHDR, IPV6_RTHDR, IPV6_RECVDSTOPTS,
        IPV6_DSTOPTS, IPV6_RECVPATHMTU, IPV6_PATHMTU, IPV6_DONTFRAG,
        IPV6_RECVTCLASS, IPV6_TCLASS, IPV6_ADD_MEMBERSHIP,
        IPV6_DROP_MEMBERSHIP, IPV6_RXHOPOPTS, IPV6_RXDSTOPTS,
        IPV6_PMTUDISC_DONT, IPV6_PMTUDISC_WANT, IPV6_PMTUDISC_DO,
        IPV6_PMTUDISC_PROBE, IPV6_PMTUDISC_INTERFACE, IPV6_PMTUDISC_OMIT,
        IPV6_RTHDR_LOOSE, IPV6_RTHDR_STRICT, IPV6_RTHDR_TYPE_0,
    );

    // netinet/in.h address classes and well-known addresses
    reg!(v, Category::AddrClass, uint:
        IN_CLASSA_NET, IN_CLASSA_NSHIFT, IN_CLASSA_HOST, IN_CLASSA_MAX,
        IN_CLASSB_NET, IN_CLASSB_NSHIFT, IN_CLASSB_HOST, IN_CLASSB_MAX,
        IN_CLASSC_NET, IN_CLASSC_NSHIFT, IN_CLASSC_HOST,
    );
    reg!(v, Category::AddrClass, int: IN_LOOPBACKNET);
    reg!(v, Category::AddrClass, uint:
        INADDR_ANY, INADDR_BROADCAST, INADDR_NONE, INADDR_LOOPBACK,
        INADDR_UNSPEC_GROUP, INADDR_ALLHOSTS_GROUP, INADDR_ALLRTRS_GROUP,
        INADDR_MAX_LOCAL_GROUP,
    );
    reg!(v, Category::Limit, int: INET_ADDRSTRLEN, INET6_ADDRSTRLEN);

    // netinet/in.h protocol and port numbers
    reg!(v, Category::Protocol, int:
        IPPROTO_IP, IPPROTO_ICMP, IPPROTO_IGMP, IPPROTO_IPIP, IPPROTO_TCP,
        IPPROTO_EGP, IPPROTO_PUP, IPPROTO_UDP, IPPROTO_IDP, IPPROTO_TP,
        IPPROTO_DCCP, IPPROTO_IPV6, IPPROTO_RSVP, IPPROTO_GRE, IPPROTO_ESP,
        IPPROTO_AH, IPPROTO_MTP, IPPROTO_BEETPH, IPPROTO_ENCAP,
        IPPROTO_PIM, IPPROTO_COMP, IPPROTO_SCTP, IPPROTO_UDPLITE,
        IPPROTO_RAW, IPPROTO_MAX, IPPROTO_HOPOPTS, IPPROTO_ROUTING,
        IPPROTO_FRAGMENT, IPPROTO_ICMPV6, IPPROTO_NONE, IPPROTO_DSTOPTS,
        IPPROTO_MH,
    );
    reg!(v, Category::Port, int:
        IPPORT_ECHO, IPPORT_DISCARD, IPPORT_SYSTAT, IPPORT_DAYTIME,
        IPPORT_NETSTAT, IPPORT_FTP, IPPORT_TELNET, IPPORT_SMTP,
        IPPORT_TIMESERVER, IPPORT_NAMESERVER, IPPORT_WHOIS, IPPORT_MTP,
        IPPORT_TFTP, IPPORT_RJE, IPPORT_FINGER, IPPORT_TTYLINK,
        IPPORT_SUPDUP, IPPORT_EXECSERVER, IPPORT_BIFFUDP,
        IPPORT_LOGINSERVER, IPPORT_WHOSERVER, IPPORT_CMDSERVER,
        IPPORT_EFSSERVER, IPPORT_ROUTESERVER, IPPORT_RESERVED,
        IPPORT_USERRESERVED,
    );

    v
}

lazy_static! {
    static ref ENTRIES: Vec<ConstDef> = build_entries();
    static ref INDEX: HashMap<&'static str, usize> = {
        let mut idx = HashMap::with_capacity(ENTRIES.len());
        for (i, e) in ENTRIES.iter().enumerate() {
            if idx.insert(e.name, i).is_some() {
                // A name bound twice means two platform variants leaked
                // through resolution; refuse to serve a corrupt table.
                panic!("duplicate constant binding: {}", e.name);
            }
        }
        debug!("constant table ready: {} entries", ENTRIES.len());
        idx
    };
}

/// Looks up a constant's value by name.
///
/// ## Returns:
/// `Ok(ConstValue)` for a bound name, `Err(UnknownConstant)` otherwise.
pub fn lookup(name: &str) -> Result<ConstValue, UnknownConstant> {
    entry(name).map(|e| e.value)
}

/// Looks up the full binding (value plus category) by name.
pub fn entry(name: &str) -> Result<&'static ConstDef, UnknownConstant> {
    match INDEX.get(name) {
        Some(&i) => Ok(&ENTRIES[i]),
        None => Err(UnknownConstant {
            name: name.to_string(),
        }),
    }
}

/// All bindings, in registration (source header) order.
pub fn entries() -> &'static [ConstDef] {
    &ENTRIES
}

/// The bindings of one category, in registration order.
pub fn entries_in(category: Category) -> impl Iterator<Item = &'static ConstDef> {
    ENTRIES.iter().filter(move |e| e.category == category)
}

/// Reverse lookup: the first registered name in `category` bound to
/// `value`.  Aliases resolve to the earliest definition, e.g. value 1 in
/// `SocketFamily` is `PF_LOCAL`, not `PF_UNIX`.
pub fn name_of(category: Category, value: i64) -> Option<&'static str> {
    ENTRIES
        .iter()
        .find(|e| e.category == category && e.value.matches(value))
        .map(|e| e.name)
}

/// Serializes the resolved table as CBOR so a hosting environment can
/// load the bindings as data.
pub fn export_cbor() -> Result<Vec<u8>, serde_cbor::Error> {
    serde_cbor::to_vec(&*ENTRIES)
}
