//! Fresnel integrals `S(x) = ∫₀ˣ sin(π/2·t²) dt` and
//! `C(x) = ∫₀ˣ cos(π/2·t²) dt`.
//!
//! Rational approximations from the Cephes math library, the same ones the
//! ASAM OpenDRIVE spiral reference implementation builds on: a power-series
//! rational fit for small arguments, an asymptotic expansion via the
//! auxiliary functions f and g for large arguments, and saturation at ±0.5
//! beyond the range where the asymptotic terms still carry information.
//!
//! Accuracy degrades gradually for very large |x| because sin/cos of
//! π/2·x² lose precision; this is an accepted property of the evaluation,
//! bounded by the saturation cutoff.

use std::f64::consts::{FRAC_PI_2, PI};

/// S(x) numerator, power series region.
const SN: [f64; 6] = [
    -2.991_819_194_010_198_5e3,
    7.088_400_452_577_385_8e5,
    -6.297_414_862_058_625_0e7,
    2.548_908_805_733_763_6e9,
    -4.429_795_180_596_977_8e10,
    3.180_162_978_765_678_2e11,
];

/// S(x) denominator, power series region (implicit leading 1).
const SD: [f64; 6] = [
    2.813_762_688_899_943_2e2,
    4.558_478_108_065_325_8e4,
    5.173_438_887_700_964_0e6,
    4.193_202_458_981_112_3e8,
    2.244_117_956_453_409_2e10,
    6.073_663_894_900_846_4e11,
];

/// C(x) numerator, power series region.
const CN: [f64; 6] = [
    -4.988_431_145_735_735_4e-8,
    9.504_280_628_298_596_0e-6,
    -6.451_914_356_839_650_5e-4,
    1.888_433_193_967_038_5e-2,
    -2.055_259_009_550_138_9e-1,
    9.999_999_999_999_999_9e-1,
];

/// C(x) denominator, power series region.
const CD: [f64; 7] = [
    3.999_829_689_724_959_8e-12,
    9.154_392_157_746_574_8e-10,
    1.250_018_624_795_988_2e-7,
    1.222_627_890_241_790_3e-5,
    8.680_295_429_417_843_0e-4,
    4.121_420_907_221_997_9e-2,
    1.000_000_000_000_000_0,
];

/// Auxiliary f(x) numerator, asymptotic region.
const FN: [f64; 10] = [
    4.215_435_550_436_775_4e-1,
    1.434_079_197_807_588_8e-1,
    1.152_209_550_735_857_6e-2,
    3.450_179_397_825_740_3e-4,
    4.636_137_492_878_673_2e-6,
    3.055_689_837_902_576_0e-8,
    1.023_045_141_649_072_3e-10,
    1.720_107_432_681_618_3e-13,
    1.342_832_762_330_627_6e-16,
    3.763_297_112_699_878_9e-20,
];

/// Auxiliary f(x) denominator, asymptotic region (implicit leading 1).
const FD: [f64; 10] = [
    7.515_863_983_533_789_5e-1,
    1.168_889_258_591_913_8e-1,
    6.440_515_265_088_586_1e-3,
    1.559_344_091_641_530_2e-4,
    1.846_275_673_489_305_5e-6,
    1.126_992_247_639_990_4e-8,
    3.601_400_295_893_713_7e-11,
    5.887_545_336_215_784_1e-14,
    4.520_014_340_741_297_0e-17,
    1.254_432_370_900_112_6e-20,
];

/// Auxiliary g(x) numerator, asymptotic region.
const GN: [f64; 11] = [
    5.044_420_736_433_832_7e-1,
    1.971_028_335_255_234_1e-1,
    1.876_485_840_925_752_5e-2,
    6.840_793_809_153_931_0e-4,
    1.151_388_261_118_842_8e-5,
    9.828_524_436_884_222_4e-8,
    4.453_444_158_617_501_4e-10,
    1.082_680_411_390_208_7e-12,
    1.375_554_606_332_618_0e-15,
    8.363_544_356_306_774_2e-19,
    1.869_587_101_627_832_4e-22,
];

/// Auxiliary g(x) denominator, asymptotic region (implicit leading 1).
const GD: [f64; 11] = [
    1.474_957_599_251_283_2,
    3.377_489_891_200_199_7e-1,
    2.536_037_414_203_388_0e-2,
    8.146_791_071_843_061_8e-4,
    1.275_450_756_677_291_2e-5,
    1.043_145_896_575_719_9e-7,
    4.606_807_281_465_204_3e-10,
    1.102_732_150_662_402_7e-12,
    1.387_965_312_595_788_7e-15,
    8.391_588_162_831_187_0e-19,
    1.869_587_101_627_832_4e-22,
];

/// Evaluates the polynomial with the given coefficients at `x`
/// (highest-order coefficient first).
fn polevl(x: f64, coefficients: &[f64]) -> f64 {
    coefficients.iter().fold(0.0, |acc, &c| acc * x + c)
}

/// Like [`polevl`] with an implicit leading coefficient of 1.
fn p1evl(x: f64, coefficients: &[f64]) -> f64 {
    coefficients.iter().fold(1.0, |acc, &c| acc * x + c)
}

/// Computes `(S(x), C(x))`.
///
/// Infinite arguments return the exact limit `(±0.5, ±0.5)`; NaN
/// propagates.
#[must_use]
pub fn fresnel(x: f64) -> (f64, f64) {
    if x.is_nan() {
        return (f64::NAN, f64::NAN);
    }
    if x.is_infinite() {
        let half = 0.5_f64.copysign(x);
        return (half, half);
    }

    let xa = x.abs();
    let x2 = xa * xa;

    let (ss, cc) = if x2 < 2.5625 {
        let t = x2 * x2;
        let ss = xa * x2 * polevl(t, &SN) / p1evl(t, &SD);
        let cc = xa * polevl(t, &CN) / polevl(t, &CD);
        (ss, cc)
    } else if xa > 36974.0 {
        // Beyond this the oscillatory terms carry no usable precision.
        (0.5, 0.5)
    } else {
        let t = PI * x2;
        let u = 1.0 / (t * t);
        let t_inv = 1.0 / t;
        let f = 1.0 - u * polevl(u, &FN) / p1evl(u, &FD);
        let g = t_inv * polevl(u, &GN) / p1evl(u, &GD);

        let t = FRAC_PI_2 * x2;
        let c = t.cos();
        let s = t.sin();
        let t = PI * xa;
        let cc = 0.5 + (f * s - g * c) / t;
        let ss = 0.5 - (f * c + g * s) / t;
        (ss, cc)
    };

    // Both integrals are odd functions.
    if x < 0.0 {
        (-ss, -cc)
    } else {
        (ss, cc)
    }
}
