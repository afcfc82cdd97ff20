use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
    thread,
};

use approx::assert_relative_eq;
use zipmath::{functions, vec3, Mat2x3, Matrix, Vec3, Vec3f, Vec4f, Vector};

const ITERATIONS: usize = 500;

fn rng() -> fastrand::Rng {
    let mut hasher = DefaultHasher::new();
    thread::current().name().unwrap().hash(&mut hasher);
    fastrand::Rng::with_seed(hasher.finish())
}

fn random_vec<const N: usize>(rng: &mut fastrand::Rng) -> Vector<f32, N> {
    Vector::from_fn(|_| rng.f32() * 200.0 - 100.0)
}

fn random_mat<const R: usize, const C: usize>(rng: &mut fastrand::Rng) -> Matrix<f32, R, C> {
    Matrix::from_fn(|_, _| rng.f32() * 200.0 - 100.0)
}

#[test]
fn basic_scenarios() {
    let a: Vec3f = vec3(1.0, 2.0, 3.0);
    let b: Vec3f = vec3(4.0, 5.0, 6.0);
    assert_eq!(a + b, vec3(5.0, 7.0, 9.0));
    assert_eq!(a + 2.0, vec3(3.0, 4.0, 5.0));
    assert_eq!(2.0 + a, vec3(3.0, 4.0, 5.0));

    let mut c = a;
    c += b;
    assert_eq!(c, vec3(5.0, 7.0, 9.0));
    assert_eq!(b, vec3(4.0, 5.0, 6.0));

    let x: Vec3f = vec3(-2.0, 0.5, 2.0);
    assert_eq!(functions::clamp(x, 0.0, 1.0), vec3(0.0, 0.5, 1.0));
}

#[test]
fn double_negation() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let v = random_vec::<4>(&mut rng);
        assert_eq!(-(-v), v);

        let m = random_mat::<2, 3>(&mut rng);
        assert_eq!(-(-m), m);

        let i: Vec3<i32> = Vector::from_fn(|_| rng.i32(..));
        assert_eq!(!!i, i);
    }
}

#[test]
fn broadcast_equivalence() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let v = random_vec::<3>(&mut rng);
        let s = rng.f32() * 10.0 + 0.5;
        let splat = Vec3f::splat(s);

        assert_eq!(v + s, v + splat);
        assert_eq!(s + v, splat + v);
        assert_eq!(v - s, v - splat);
        assert_eq!(s - v, splat - v);
        assert_eq!(v * s, v * splat);
        assert_eq!(s * v, splat * v);
        assert_eq!(v / s, v / splat);
        assert_eq!(s / v, splat / v);
        assert_eq!(v % s, v % splat);
        assert_eq!(functions::pow(s, v), functions::pow(splat, v));
        assert_eq!(functions::min(v, s), functions::min(v, splat));
        assert_eq!(functions::mix(v, s, 0.25), functions::mix(v, splat, Vec3f::splat(0.25)));

        let m = random_mat::<2, 3>(&mut rng);
        let msplat = Mat2x3::splat(s);
        assert_eq!(m + s, m + msplat);
        assert_eq!(s - m, msplat - m);
        assert_eq!(functions::comp_mul(m, s), functions::comp_mul(m, msplat));
        assert_eq!(functions::max(s, m), functions::max(msplat, m));

        let bits: u32 = rng.u32(..);
        let iv: Vec3<u32> = Vector::from_fn(|_| rng.u32(..));
        assert_eq!(iv & bits, iv & Vec3::splat(bits));
        assert_eq!(bits ^ iv, Vec3::splat(bits) ^ iv);
        let shift = rng.u32(0..32);
        assert_eq!(iv << shift, iv << Vec3::splat(shift));
        assert_eq!(iv >> shift, iv >> Vec3::splat(shift));
    }
}

#[test]
fn compound_equivalence() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let a = random_vec::<4>(&mut rng);
        // Nonzero, so that `%` and `/` don't produce NaN.
        let b = random_vec::<4>(&mut rng).map(|x| if x == 0.0 { 1.0 } else { x });
        let s = rng.f32() + 0.5;

        macro_rules! check {
            ($op:tt, $op_assign:tt, $rhs:expr) => {{
                let mut x = a;
                x $op_assign $rhs;
                assert_eq!(x, a $op $rhs);
            }};
        }

        check!(+, +=, b);
        check!(-, -=, b);
        check!(*, *=, b);
        check!(/, /=, b);
        check!(%, %=, b);
        check!(+, +=, s);
        check!(-, -=, s);
        check!(*, *=, s);
        check!(/, /=, s);
        check!(%, %=, s);

        let m = random_mat::<3, 2>(&mut rng);
        let n = random_mat::<3, 2>(&mut rng);
        let mut x = m;
        x -= n;
        assert_eq!(x, m - n);
        let mut x = m;
        x *= s;
        assert_eq!(x, m * s);

        let i: Vec3<u8> = Vector::from_fn(|_| rng.u8(..));
        let j: Vec3<u8> = Vector::from_fn(|_| rng.u8(..));
        let mut x = i;
        x |= j;
        assert_eq!(x, i | j);
        let mut x = i;
        x ^= j;
        assert_eq!(x, i ^ j);
        let mut x = i;
        x &= 0x0f;
        assert_eq!(x, i & 0x0f);
    }
}

#[test]
fn elementwise_correctness() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let a = random_vec::<4>(&mut rng);
        let b = random_vec::<4>(&mut rng);
        let c = random_vec::<4>(&mut rng);

        let sum = a + b;
        let atan2 = functions::atan2(a, b);
        let clamped = functions::clamp(a, b, c);
        let fract = functions::fract(a);
        let lt = functions::less_than(a, b);
        for i in 0..4 {
            assert_eq!(sum[i], a[i] + b[i]);
            assert_eq!(atan2[i], a[i].atan2(b[i]));
            assert_eq!(clamped[i], a[i].max(b[i]).min(c[i]));
            assert_eq!(fract[i], a[i] - a[i].floor());
            assert_eq!(lt[i], a[i] < b[i]);
        }

        let m = random_mat::<2, 3>(&mut rng);
        let exp = functions::exp(m * 0.01);
        for row in 0..2 {
            for col in 0..3 {
                assert_eq!(exp[(row, col)], (m[(row, col)] * 0.01).exp());
            }
        }
    }
}

#[test]
fn function_identities() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let v: Vec4f = random_vec(&mut rng);

        assert_relative_eq!(functions::degrees(functions::radians(v)), v, max_relative = 1e-5);
        assert_eq!(functions::abs(-v), functions::abs(v));
        assert_eq!(functions::sign(v) * functions::abs(v), v);
        assert!(functions::all(functions::less_than_equal(functions::floor(v), v)));
        assert!(functions::all(functions::greater_than_equal(functions::ceil(v), v)));

        let m = functions::modulo(v, 1.0);
        assert_relative_eq!(m, functions::fract(v), epsilon = 1e-4);

        let s = functions::smoothstep(-50.0, 50.0, v);
        assert!(functions::all(functions::greater_than_equal(s, 0.0)));
        assert!(functions::all(functions::less_than_equal(s, 1.0 + 1e-6)));
    }
}
