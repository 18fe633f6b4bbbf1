use inetdefs::convert::*;

// ---------- [IPv4 address classes] ----------

#[test]
fn loopback_is_class_a() {
    assert!(in_classa(0x7f00_0001));
    assert!(!in_classb(0x7f00_0001));
    assert!(!in_classc(0x7f00_0001));
    assert!(!in_classd(0x7f00_0001));
}

#[test]
fn classes_partition_the_address_space() {
    let samples: [u32; 10] = [
        0x0000_0000,
        0x0a00_0001, // 10.0.0.1
        0x7f00_0001, // 127.0.0.1
        0x8000_0000, // class B start
        0xac10_0001, // 172.16.0.1
        0xc0a8_0101, // 192.168.1.1
        0xc000_0000, // class C start
        0xe000_0001, // 224.0.0.1
        0xf000_0000, // reserved
        0xffff_ffff,
    ];
    for a in samples {
        let classes = [
            in_classa(a),
            in_classb(a),
            in_classc(a),
            in_classd(a),
            in_badclass(a),
        ];
        let hits = classes.iter().filter(|&&c| c).count();
        assert_eq!(hits, 1, "address {:#010x} fell into {} classes", a, hits);
    }
}

#[test]
fn multicast_is_class_d() {
    assert!(in_multicast(0xe000_0001));
    assert!(in_multicast(0xefff_ffff));
    assert!(!in_multicast(0xdfff_ffff));
    assert!(!in_multicast(0xf000_0000));
}

#[test]
fn experimental_covers_class_d_and_reserved() {
    assert!(in_experimental(0xe000_0000));
    assert!(in_experimental(0xffff_ffff));
    assert!(!in_experimental(0xc0a8_0101));
}

// ---------- [IPv6 address predicates] ----------

fn addr(head: &[u8], tail: &[u8]) -> [u8; 16] {
    let mut a = [0u8; 16];
    a[..head.len()].copy_from_slice(head);
    a[16 - tail.len()..].copy_from_slice(tail);
    a
}

#[test]
fn unspecified_and_loopback() {
    let any = [0u8; 16];
    let loopback = addr(&[], &[1]);
    assert!(in6_is_addr_unspecified(&any));
    assert!(!in6_is_addr_unspecified(&loopback));
    assert!(in6_is_addr_loopback(&loopback));
    assert!(!in6_is_addr_loopback(&any));
}

#[test]
fn link_and_site_local_prefixes() {
    let link = addr(&[0xfe, 0x80], &[1]);
    let site = addr(&[0xfe, 0xc0], &[1]);
    assert!(in6_is_addr_linklocal(&link));
    assert!(!in6_is_addr_sitelocal(&link));
    assert!(in6_is_addr_sitelocal(&site));
    assert!(!in6_is_addr_linklocal(&site));
}

#[test]
fn v4_mapped_and_compatible() {
    let mapped = addr(&[], &[0xff, 0xff, 127, 0, 0, 1]);
    assert!(in6_is_addr_v4mapped(&mapped));
    assert!(!in6_is_addr_v4compat(&mapped));

    let compat = addr(&[], &[0, 0, 0, 2]);
    assert!(in6_is_addr_v4compat(&compat));
    // :: and ::1 are excluded from the v4-compatible range.
    assert!(!in6_is_addr_v4compat(&[0u8; 16]));
    assert!(!in6_is_addr_v4compat(&addr(&[], &[1])));
}

#[test]
fn multicast_scopes_follow_the_second_byte() {
    let node = addr(&[0xff, 0x01], &[1]);
    let link = addr(&[0xff, 0x02], &[1]);
    let site = addr(&[0xff, 0x05], &[1]);
    let org = addr(&[0xff, 0x08], &[1]);
    let global = addr(&[0xff, 0x0e], &[1]);

    assert!(in6_is_addr_multicast(&link));
    assert!(in6_is_addr_mc_nodelocal(&node));
    assert!(in6_is_addr_mc_linklocal(&link));
    assert!(in6_is_addr_mc_sitelocal(&site));
    assert!(in6_is_addr_mc_orglocal(&org));
    assert!(in6_is_addr_mc_global(&global));
    // A unicast link-local address is not multicast scope 2.
    assert!(!in6_is_addr_mc_linklocal(&addr(&[0xfe, 0x80], &[1])));
}

// ---------- [Device numbers] ----------

#[test]
fn dev_numbers_pack_and_unpack() {
    // /dev/sda1 on a stock kernel
    assert_eq!(makedev(8, 1), 0x801);
    assert_eq!(major(0x801), 8);
    assert_eq!(minor(0x801), 1);

    // Values that spill into the extended high bits
    let dev = makedev(0x12345, 0xabcdef);
    assert_eq!(major(dev), 0x12345);
    assert_eq!(minor(dev), 0xabcdef);
}
