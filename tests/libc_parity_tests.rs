//! Cross-checks the baked values against the libc crate on the build
//! target.  Only names libc exports on every supported Linux target are
//! compared.

#![cfg(target_os = "linux")]

macro_rules! assert_matches_libc {
    ($($name:ident),+ $(,)?) => {
        $(assert_eq!(
            i64::from(inetdefs::$name),
            i64::from(libc::$name),
            concat!(stringify!($name), " disagrees with libc"),
        );)+
    };
}

// ---------- [Socket families and levels] ----------

#[test]
fn socket_families_agree_with_libc() {
    assert_matches_libc!(
        AF_UNSPEC, AF_UNIX, AF_INET, AF_AX25, AF_IPX, AF_APPLETALK,
        AF_NETROM, AF_BRIDGE, AF_X25, AF_INET6, AF_ROSE, AF_NETBEUI,
        AF_SECURITY, AF_KEY, AF_NETLINK, AF_PACKET, AF_ASH, AF_ECONET,
        AF_ATMSVC, AF_RDS, AF_SNA, AF_IRDA, AF_PPPOX, AF_WANPIPE, AF_LLC,
        AF_CAN, AF_TIPC, AF_BLUETOOTH, AF_IUCV, AF_RXRPC, AF_ISDN,
        AF_PHONET, AF_IEEE802154, AF_CAIF, AF_ALG, AF_NFC, AF_VSOCK,
    );
}

#[test]
fn socket_levels_and_limits_agree_with_libc() {
    assert_matches_libc!(SOL_IP, SOL_IPV6, SOL_ICMPV6, SOMAXCONN);
    assert_eq!(inetdefs::FD_SETSIZE as usize, libc::FD_SETSIZE as usize);
}

// ---------- [IP and IPv6 options] ----------

#[test]
fn ip_options_agree_with_libc() {
    assert_matches_libc!(
        IP_TOS, IP_TTL, IP_HDRINCL, IP_PKTINFO, IP_MTU_DISCOVER,
        IP_MULTICAST_IF, IP_MULTICAST_TTL, IP_MULTICAST_LOOP,
        IP_ADD_MEMBERSHIP, IP_DROP_MEMBERSHIP, IP_TRANSPARENT,
    );
}

#[test]
fn ipv6_options_agree_with_libc() {
    assert_matches_libc!(
        IPV6_UNICAST_HOPS, IPV6_MULTICAST_IF, IPV6_MULTICAST_HOPS,
        IPV6_MULTICAST_LOOP, IPV6_ADD_MEMBERSHIP, IPV6_DROP_MEMBERSHIP,
        IPV6_V6ONLY,
    );
}

// ---------- [Protocols, clocks, addresses] ----------

#[test]
fn protocol_numbers_agree_with_libc() {
    assert_matches_libc!(
        IPPROTO_IP, IPPROTO_ICMP, IPPROTO_TCP, IPPROTO_UDP, IPPROTO_IPV6,
        IPPROTO_ICMPV6, IPPROTO_RAW,
    );
}

#[test]
fn clock_ids_agree_with_libc() {
    assert_matches_libc!(
        CLOCK_REALTIME, CLOCK_MONOTONIC, CLOCK_PROCESS_CPUTIME_ID,
        CLOCK_THREAD_CPUTIME_ID, CLOCK_MONOTONIC_RAW, CLOCK_BOOTTIME,
        CLOCK_TAI,
    );
}

#[test]
fn well_known_addresses_agree_with_libc() {
    assert_eq!(u64::from(inetdefs::INADDR_ANY), u64::from(libc::INADDR_ANY));
    assert_eq!(
        u64::from(inetdefs::INADDR_LOOPBACK),
        u64::from(libc::INADDR_LOOPBACK)
    );
    assert_eq!(
        u64::from(inetdefs::INADDR_BROADCAST),
        u64::from(libc::INADDR_BROADCAST)
    );
    assert_eq!(u64::from(inetdefs::INADDR_NONE), u64::from(libc::INADDR_NONE));
}
