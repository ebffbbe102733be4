//! secp256k1 unit tests

use super::*;
use rand::rngs::OsRng;
use rand::Rng;

fn fe(s: &str) -> FieldElement {
    let mut bytes = [0u8; 32];
    hex::decode_to_slice(s, &mut bytes).unwrap();
    FieldElement::from_bytes(&bytes).unwrap()
}

fn scalar_from_u64(v: u64) -> Scalar {
    let mut bytes = [0u8; 32];
    bytes[24..].copy_from_slice(&v.to_be_bytes());
    Scalar::new(bytes).unwrap()
}

#[test]
fn test_field_arithmetic() {
    let one = FieldElement::one();
    let two = FieldElement::from_u32(2);

    // 1 + 1 = 2
    assert_eq!(one.add(&one), two);

    // 2 - 1 = 1
    assert_eq!(two.sub(&one), one);

    // 2 * 1 = 2
    assert_eq!(two.mul(&one), two);

    // 1 * 1^-1 = 1
    let inv_one = one.invert().unwrap();
    assert_eq!(one.mul(&inv_one), one);

    // 2 * 2^-1 = 1
    let inv_two = two.invert().unwrap();
    assert_eq!(two.mul(&inv_two), one);
}

#[test]
fn test_field_modulus_boundary() {
    // p - 1 is a valid element, p itself is not
    let mut p_minus_1 = [0xFFu8; 32];
    p_minus_1[27] = 0xFE;
    p_minus_1[28] = 0xFF;
    p_minus_1[29] = 0xFF;
    p_minus_1[30] = 0xFC;
    p_minus_1[31] = 0x2E;
    assert!(FieldElement::from_bytes(&p_minus_1).is_ok());

    let mut p_bytes = p_minus_1;
    p_bytes[31] = 0x2F;
    assert!(FieldElement::from_bytes(&p_bytes).is_err());

    // (p - 1) + 1 wraps to zero
    let max = FieldElement::from_bytes(&p_minus_1).unwrap();
    assert!(max.add(&FieldElement::one()).is_zero());

    // 0 - 1 wraps back to p - 1
    assert_eq!(FieldElement::zero().sub(&FieldElement::one()), max);
}

#[test]
fn test_field_parity() {
    assert!(FieldElement::one().is_odd());
    assert!(!FieldElement::from_u32(256).is_odd());
}

#[test]
fn test_field_arithmetic_properties() {
    let mut rng = OsRng;

    for _ in 0..20 {
        let mut a_bytes = [0u8; 32];
        let mut b_bytes = [0u8; 32];
        let mut c_bytes = [0u8; 32];
        rng.fill(&mut a_bytes);
        rng.fill(&mut b_bytes);
        rng.fill(&mut c_bytes);

        if let (Ok(a), Ok(b), Ok(c)) = (
            FieldElement::from_bytes(&a_bytes),
            FieldElement::from_bytes(&b_bytes),
            FieldElement::from_bytes(&c_bytes),
        ) {
            // Commutativity
            assert_eq!(a.add(&b), b.add(&a));
            assert_eq!(a.mul(&b), b.mul(&a));

            // Associativity
            assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
            assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));

            // Distributivity: a * (b + c) = a * b + a * c
            assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));

            // Identities
            assert_eq!(a.add(&FieldElement::zero()), a);
            assert_eq!(a.mul(&FieldElement::one()), a);

            // Inverses
            assert!(a.add(&a.negate()).is_zero());
            if !a.is_zero() {
                let a_inv = a.invert().unwrap();
                assert_eq!(a.mul(&a_inv), FieldElement::one());
            }
        }
    }
}

#[test]
fn test_field_sqrt_consistency() {
    let mut rng = OsRng;

    // sqrt(x²) = ±x whenever it exists
    for _ in 0..20 {
        let mut bytes = [0u8; 32];
        rng.fill(&mut bytes);

        if let Ok(x) = FieldElement::from_bytes(&bytes) {
            let x_squared = x.square();
            let root = x_squared.sqrt().expect("squares are residues");
            assert!(root == x || root == x.negate());
            assert_eq!(root.square(), x_squared);
        }
    }
}

#[test]
fn test_field_sqrt_non_residue() {
    // 5 is a quadratic non-residue mod p
    assert!(FieldElement::from_u32(5).sqrt().is_none());
    // 2 and 4 are residues
    assert!(FieldElement::from_u32(4).sqrt().is_some());
    assert!(FieldElement::from_u32(2).sqrt().is_some());
}

#[test]
fn test_invert_zero_fails() {
    assert!(FieldElement::zero().invert().is_err());
}

#[test]
fn test_scalar_range_checks() {
    // Zero is rejected
    assert!(Scalar::new([0u8; 32]).is_err());

    // The group order n is rejected, n - 1 is accepted
    let n = btcrypt_params::secp256k1::N;
    assert!(Scalar::new(n).is_err());
    let mut n_minus_1 = n;
    n_minus_1[31] = 0x40;
    assert!(Scalar::new(n_minus_1).is_ok());

    // Values above n are rejected rather than reduced
    assert!(Scalar::new([0xFF; 32]).is_err());
}

#[test]
fn test_scalar_hex() {
    let scalar = Scalar::from_hex("01").unwrap();
    assert_eq!(
        scalar.to_hex(),
        "0000000000000000000000000000000000000000000000000000000000000001"
    );

    // Case-insensitive
    let upper = Scalar::from_hex("C0FFEE").unwrap();
    let lower = Scalar::from_hex("c0ffee").unwrap();
    assert_eq!(upper.serialize(), lower.serialize());

    // Longer than 64 characters is rejected
    assert!(Scalar::from_hex(&"1".repeat(65)).is_err());
    // Non-hex digits are rejected
    assert!(Scalar::from_hex("zz").is_err());
}

#[test]
fn test_base_point() {
    let g = base_point_g();
    assert!(g.is_valid());
    assert_eq!(g.x_coordinate_bytes(), btcrypt_params::secp256k1::G_X);
    assert_eq!(g.y_coordinate_bytes(), btcrypt_params::secp256k1::G_Y);
    // Gy ends in 0xB8, so it is even
    assert!(!g.y_is_odd());
}

#[test]
fn test_point_doubling_known_vector() {
    let g = base_point_g();
    let g2 = g.double();
    assert_eq!(
        g2.x,
        fe("c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5")
    );
    assert_eq!(
        g2.y,
        fe("1ae168fea63dc339a3c58419466ceaeef7f632653266d0e1236431a950cfe52a")
    );
}

#[test]
fn test_point_addition_known_vector() {
    let g = base_point_g();
    let g3 = g.double().add(&g);
    assert_eq!(
        g3.x,
        fe("f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9")
    );
    assert_eq!(
        g3.y,
        fe("388f7b0f632de8140fe337e62a37f3566500a99934c2231b6cb9fd7584b8e672")
    );
}

#[test]
fn test_point_operations() {
    let g = base_point_g();
    let g2 = g.double();

    // G + G = 2G
    assert_eq!(g.add(&g), g2);

    // G + (-G) = O
    let neg_g = Point {
        is_identity: g.is_identity,
        x: g.x.clone(),
        y: g.y.negate(),
    };
    assert!(g.add(&neg_g).is_identity());

    // O + P = P and P + O = P
    let identity = Point::identity();
    assert_eq!(identity.add(&g), g);
    assert_eq!(g.add(&identity), g);

    // O + O = O, 2·O = O
    assert!(identity.add(&identity).is_identity());
    assert!(identity.double().is_identity());
}

#[test]
fn test_scalar_multiplication() {
    let g = base_point_g();

    // 1·G = G
    let one = scalar_from_u64(1);
    assert_eq!(g.mul(&one).unwrap(), g);

    // 2·G = G doubled
    let two = scalar_from_u64(2);
    assert_eq!(g.mul(&two).unwrap(), g.double());

    // 5·G = 2·(2·G) + G
    let five = scalar_from_u64(5);
    let expected = g.double().double().add(&g);
    assert_eq!(g.mul(&five).unwrap(), expected);
}

#[test]
fn test_scalar_multiplication_known_vector() {
    let k = Scalar::from_hex("c0ffee254729296a45a3885639ac7e10f9d54979c0ab494b8429565a76274a8f")
        .unwrap();
    let p = scalar_mult_base_g(&k).unwrap();
    assert_eq!(
        p.x,
        fe("c82830ca2eadc2f5203311006a578c1517e4833050537752aa7fceb45c83b563")
    );
    assert_eq!(
        p.y,
        fe("02f612f21bb3f69b17f81649c9e511a4dcfe7ccb948667724703f050ee810f53")
    );
}

#[test]
fn test_scalar_multiplication_determinism() {
    let k = Scalar::from_hex("deadbeef").unwrap();
    let first = scalar_mult_base_g(&k).unwrap();
    let second = scalar_mult_base_g(&k).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_order_boundary_multiplication() {
    let g = base_point_g();

    // (n-1)·G = -G, the mirror image of the base point
    let mut n_minus_1 = btcrypt_params::secp256k1::N;
    n_minus_1[31] = 0x40;
    let k = Scalar::new(n_minus_1).unwrap();
    let p = g.mul(&k).unwrap();
    assert_eq!(p.x, g.x);
    assert_eq!(p.y, g.y.negate());

    // (n-1)·G + G = O
    assert!(p.add(&g).is_identity());
}

#[test]
fn test_on_curve_invariant() {
    let mut rng = OsRng;
    let g = base_point_g();

    for _ in 0..20 {
        let mut scalar_bytes = [0u8; 32];
        rng.fill(&mut scalar_bytes);

        if let Ok(scalar) = Scalar::new(scalar_bytes) {
            let point = g.mul(&scalar).unwrap();
            assert!(point.is_valid(), "derived point must lie on the curve");
            assert!(!point.is_identity());
        }
    }
}

#[test]
fn test_point_group_properties() {
    let mut rng = OsRng;
    let g = base_point_g();

    // (P + Q) + R = P + (Q + R)
    for _ in 0..5 {
        let mut s1_bytes = [0u8; 32];
        let mut s2_bytes = [0u8; 32];
        let mut s3_bytes = [0u8; 32];
        rng.fill(&mut s1_bytes);
        rng.fill(&mut s2_bytes);
        rng.fill(&mut s3_bytes);

        if let (Ok(s1), Ok(s2), Ok(s3)) = (
            Scalar::new(s1_bytes),
            Scalar::new(s2_bytes),
            Scalar::new(s3_bytes),
        ) {
            let p = g.mul(&s1).unwrap();
            let q = g.mul(&s2).unwrap();
            let r = g.mul(&s3).unwrap();

            assert_eq!(p.add(&q).add(&r), p.add(&q.add(&r)));
            assert_eq!(p.add(&q), q.add(&p));
        }
    }
}

#[test]
fn test_point_serialization() {
    let g = base_point_g();

    let uncompressed = g.serialize_uncompressed();
    assert_eq!(uncompressed[0], 0x04);
    assert_eq!(
        hex::encode(uncompressed),
        "0479be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798\
         483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"
    );

    let compressed = g.serialize_compressed();
    assert_eq!(compressed[0], 0x02);
    assert_eq!(
        hex::encode(compressed),
        "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
    );
}

#[test]
fn test_point_deserialization_roundtrip() {
    let mut rng = OsRng;
    let g = base_point_g();

    for _ in 0..10 {
        let mut scalar_bytes = [0u8; 32];
        rng.fill(&mut scalar_bytes);

        if let Ok(scalar) = Scalar::new(scalar_bytes) {
            let point = g.mul(&scalar).unwrap();

            let compressed = point.serialize_compressed();
            assert_eq!(Point::deserialize_compressed(&compressed).unwrap(), point);

            let uncompressed = point.serialize_uncompressed();
            assert_eq!(
                Point::deserialize_uncompressed(&uncompressed).unwrap(),
                point
            );
        }
    }
}

#[test]
fn test_point_deserialization_rejects_garbage() {
    // Wrong lengths
    assert!(Point::deserialize_compressed(&[0x02; 32]).is_err());
    assert!(Point::deserialize_uncompressed(&[0x04; 64]).is_err());

    // Wrong prefix
    let mut bad = base_point_g().serialize_compressed();
    bad[0] = 0x05;
    assert!(Point::deserialize_compressed(&bad).is_err());

    // Coordinates off the curve: y replaced with y + 1
    let g = base_point_g();
    let mut x = g.x_coordinate_bytes();
    let y = g.y.add(&FieldElement::one()).to_bytes();
    assert!(Point::from_coordinates(&x, &y).is_err());
    x[31] ^= 0xFF;
    assert!(!is_on_curve(&x, &g.y_coordinate_bytes()));
}

#[test]
fn test_is_on_curve_free_function() {
    assert!(is_on_curve(
        &btcrypt_params::secp256k1::G_X,
        &btcrypt_params::secp256k1::G_Y
    ));
}
