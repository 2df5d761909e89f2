mod util;
use util::core_cycles;

use gf25519::field::GF25519;

// Additions and subtractions are not benchmarked on their own: they do
// not reduce their output, so a long feedback loop of them would let
// the limbs grow out of range. The mul bench below exercises the
// add-then-multiply pattern that dominates curve formulas instead.

fn bench_gf25519_mul() {
    let z = core_cycles();
    let mut x = GF25519::w64le(z, z.wrapping_mul(3),
        z.wrapping_mul(5), z.wrapping_mul(7));
    let mut y = x + GF25519::ONE;
    let mut tt = [0; 10];
    for i in 0..10 {
        let begin = core_cycles();
        for _ in 0..1000 {
            x *= y;
            y *= x;
            x *= y;
            y *= x;
            x *= y;
            y *= x;
        }
        let end = core_cycles();
        tt[i] = end.wrapping_sub(begin);
    }
    tt.sort();
    println!("GF25519 mul:          {:11.2}  ({})", (tt[4] as f64) / 6000.0, x.encode32()[0]);
}

fn bench_gf25519_square() {
    let z = core_cycles();
    let mut x = GF25519::w64le(z, z.wrapping_mul(3),
        z.wrapping_mul(5), z.wrapping_mul(7));
    let mut tt = [0; 10];
    for i in 0..10 {
        let begin = core_cycles();
        x = x.xsquare(6000);
        let end = core_cycles();
        tt[i] = end.wrapping_sub(begin);
    }
    tt.sort();
    println!("GF25519 square:       {:11.2}  ({})", (tt[4] as f64) / 6000.0, x.encode32()[0]);
}

fn bench_gf25519_square2() {
    let z = core_cycles();
    let mut x = GF25519::w64le(z, z.wrapping_mul(3),
        z.wrapping_mul(5), z.wrapping_mul(7));
    let mut tt = [0; 10];
    for i in 0..10 {
        let begin = core_cycles();
        for _ in 0..6000 {
            x.set_square2();
        }
        let end = core_cycles();
        tt[i] = end.wrapping_sub(begin);
    }
    tt.sort();
    println!("GF25519 square2:      {:11.2}  ({})", (tt[4] as f64) / 6000.0, x.encode32()[0]);
}

fn bench_gf25519_invert() {
    let z = core_cycles();
    let mut x = GF25519::w64le(z, z.wrapping_mul(3),
        z.wrapping_mul(5), z.wrapping_mul(7));
    let mut tt = [0; 10];
    for i in 0..10 {
        let begin = core_cycles();
        for _ in 0..100 {
            x.set_invert();
            x += GF25519::ONE;
        }
        let end = core_cycles();
        tt[i] = end.wrapping_sub(begin);
    }
    tt.sort();
    println!("GF25519 invert:       {:11.2}  ({})", (tt[4] as f64) / 100.0, x.encode32()[0]);
}

fn bench_gf25519_codec() {
    let z = core_cycles();
    let mut x = GF25519::w64le(z, z.wrapping_mul(3),
        z.wrapping_mul(5), z.wrapping_mul(7));
    let mut tt = [0; 10];
    for i in 0..10 {
        let begin = core_cycles();
        for _ in 0..1000 {
            let mut v = x.encode32();
            v[0] = v[0].wrapping_add(1);
            x = GF25519::decode32(&v);
        }
        let end = core_cycles();
        tt[i] = end.wrapping_sub(begin);
    }
    tt.sort();
    println!("GF25519 encode+decode:{:11.2}  ({})", (tt[4] as f64) / 1000.0, x.encode32()[0]);
}

fn main() {
    bench_gf25519_mul();
    bench_gf25519_square();
    bench_gf25519_square2();
    bench_gf25519_invert();
    bench_gf25519_codec();
}
