use rijn_field::Gf;

#[test]
fn test_aes_vector() {
    // Known AES vector: 0x57 * 0x83 = 0xC1
    let a = Gf(0x57);
    let b = Gf(0x83);
    assert_eq!(a.mul(b), Gf(0xC1), "Table mul failed");
    assert_eq!(a.mul_slow(b), Gf(0xC1), "Bitwise mul failed");
}

#[test]
fn test_mul_paths_agree() {
    // The log/antilog path and the shift-and-xor path are independent
    // derivations; they must agree on every pair.
    for a in 0..=255u8 {
        for b in 0..=255u8 {
            assert_eq!(
                Gf(a).mul(Gf(b)),
                Gf(a).mul_slow(Gf(b)),
                "mul paths diverge at {} * {}",
                a,
                b
            );
        }
    }
}

#[test]
fn test_mul_commutative() {
    for a in 0..=255u8 {
        assert_eq!(Gf(a).mul(Gf(0)), Gf::ZERO);
        assert_eq!(Gf(0).mul(Gf(a)), Gf::ZERO);
        assert_eq!(Gf(a).mul(Gf::ONE), Gf(a));
        assert_eq!(Gf::ONE.mul(Gf(a)), Gf(a));
        for b in 0..=255u8 {
            assert_eq!(Gf(a).mul(Gf(b)), Gf(b).mul(Gf(a)));
        }
    }
}

#[test]
fn test_distributive_grid() {
    // a * (b + c) = a * b + a * c, spot grid over the full range
    for a in (0..=255u8).step_by(17) {
        for b in (0..=255u8).step_by(17) {
            for c in (0..=255u8).step_by(17) {
                let left = Gf(a).mul(Gf(b).add(Gf(c)));
                let right = Gf(a).mul(Gf(b)).add(Gf(a).mul(Gf(c)));
                assert_eq!(left, right, "Distributivity failed at {} {} {}", a, b, c);
            }
        }
    }
}

#[test]
fn test_inverse_properties() {
    assert_eq!(Gf(0).inv(), Gf::ZERO, "inv(0) must stay 0");
    assert_eq!(Gf::ONE.inv(), Gf::ONE);

    for a in 1..=255u8 {
        let inv_a = Gf(a).inv();
        assert_eq!(Gf(a).mul(inv_a), Gf::ONE, "inv({}) = {:?} failed", a, inv_a);
        assert_eq!(inv_a.inv(), Gf(a), "inv is not an involution at {}", a);
    }
}

#[test]
fn test_generator_validity() {
    // 3 spans the whole multiplicative group: 3^255 = 1, and no shorter
    // power of it returns to 1.
    let mut x = Gf::ONE;
    for i in 1..=255u32 {
        x = x * Gf(3);
        if i < 255 {
            assert_ne!(x, Gf::ONE, "Generator 3 cycled early at power {}", i);
        }
    }
    assert_eq!(x, Gf::ONE, "Generator 3 does not span the group");
}

#[test]
fn test_affine_known_points() {
    // affine(0) is the additive constant itself
    assert_eq!(Gf(0).affine(), Gf(0x63));
    // First two S-box entries: affine(inv(0)) and affine(inv(1))
    assert_eq!(Gf(0).inv().affine(), Gf(0x63));
    assert_eq!(Gf(1).inv().affine(), Gf(0x7C));
}

#[test]
fn test_add_is_self_inverse() {
    for a in 0..=255u8 {
        assert_eq!(Gf(a).add(Gf(a)), Gf::ZERO);
        assert_eq!(Gf(a).add(Gf::ZERO), Gf(a));
        assert_eq!(Gf(a).sub(Gf(a)), Gf::ZERO);
    }
}
