//! Property-based tests for the closed-form kernels and facades.

use pricer_core::batch::{BatchConfig, BatchEvaluator};
use pricer_core::math::generate_mesh;
use pricer_core::traits::SpotPricer;
use pricer_core::types::{OptionKind, OptionParams, SweepParameter};
use pricer_models::analytical::{american, european};
use pricer_models::instruments::{AmericanOption, EuropeanOption};
use proptest::prelude::*;

fn params_strategy() -> impl Strategy<Value = OptionParams> {
    (
        0.05..5.0_f64,   // expiry
        50.0..150.0_f64, // strike
        0.05..0.6_f64,   // volatility
        0.0..0.1_f64,    // rate
        -0.05..0.1_f64,  // carry
    )
        .prop_map(|(t, k, sig, r, b)| OptionParams::market(t, k, sig, r, b))
}

fn kind_strategy() -> impl Strategy<Value = OptionKind> {
    prop_oneof![Just(OptionKind::Call), Just(OptionKind::Put)]
}

fn parallel_evaluator() -> BatchEvaluator {
    BatchEvaluator::new(BatchConfig::builder().parallel_threshold(1).build().unwrap()).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// C - P = S·e^((b-r)T) - K·e^(-rT)
    #[test]
    fn prop_put_call_parity(params in params_strategy(), spot in 50.0..150.0_f64) {
        let lhs = european::call_price(&params, spot) - european::put_price(&params, spot);
        let rhs = spot * ((params.carry - params.rate) * params.expiry).exp()
            - params.strike * (-params.rate * params.expiry).exp();
        prop_assert!((lhs - rhs).abs() < 1e-9, "lhs = {}, rhs = {}", lhs, rhs);
    }

    /// CallDelta - PutDelta = e^((b-r)T)
    #[test]
    fn prop_delta_symmetry(params in params_strategy(), spot in 50.0..150.0_f64) {
        let gap = european::call_delta(&params, spot) - european::put_delta(&params, spot);
        let expected = ((params.carry - params.rate) * params.expiry).exp();
        prop_assert!((gap - expected).abs() < 1e-12);
    }

    #[test]
    fn prop_prices_non_negative(params in params_strategy(), spot in 50.0..150.0_f64) {
        prop_assert!(european::call_price(&params, spot) >= -1e-12);
        prop_assert!(european::put_price(&params, spot) >= -1e-12);
        prop_assert!(european::gamma(&params, spot) >= 0.0);
    }

    #[test]
    fn prop_toggle_involution(
        params in params_strategy(),
        kind in kind_strategy(),
        spot in 50.0..150.0_f64,
    ) {
        let original = EuropeanOption::from_params(params, kind);
        let mut option = original;
        option.toggle();
        prop_assert_ne!(option.kind(), original.kind());
        option.toggle();
        prop_assert_eq!(option, original);
        prop_assert_eq!(option.price(spot), original.price(spot));
    }

    #[test]
    fn prop_batch_matches_scalar(
        params in params_strategy(),
        kind in kind_strategy(),
        spots in prop::collection::vec(50.0..150.0_f64, 0..64),
    ) {
        let option = EuropeanOption::from_params(params, kind);
        let batch = option.price_batch_with(&parallel_evaluator(), &spots);
        prop_assert_eq!(batch.len(), spots.len());
        for (i, &s) in spots.iter().enumerate() {
            prop_assert_eq!(batch[i], option.price(s));
        }
    }

    #[test]
    fn prop_mesh_matches_explicit_sequence(
        params in params_strategy(),
        kind in kind_strategy(),
        start in 50.0..100.0_f64,
        width in 0.0..50.0_f64,
        step in 0.5..5.0_f64,
    ) {
        let option = EuropeanOption::from_params(params, kind);
        let end = start + width;
        let points = generate_mesh(start, end, step).unwrap();
        prop_assert_eq!(option.price_mesh(start, end, step).unwrap(), option.price_batch(&points));
        prop_assert_eq!(option.delta_mesh(start, end, step).unwrap(), option.delta_batch(&points));
    }

    #[test]
    fn prop_sweep_never_mutates(
        params in params_strategy(),
        kind in kind_strategy(),
        values in prop::collection::vec(0.05..2.0_f64, 1..16),
    ) {
        let option = EuropeanOption::from_params(params, kind);
        for param in SweepParameter::ALL {
            let prices = option.price_over_parameter(param, &values, 100.0);
            prop_assert_eq!(prices.len(), values.len());
            prop_assert_eq!(*option.params(), params);
            for (i, &v) in values.iter().enumerate() {
                prop_assert_eq!(prices[i], european::price(&params.with_value(param, v), kind, 100.0));
            }
        }
    }

    #[test]
    fn prop_parity_round_trip(params in params_strategy(), spot in 50.0..150.0_f64) {
        let call = european::call_price(&params, spot);
        let put = european::call_to_put(&params, call, spot);
        prop_assert!((european::put_to_call(&params, put, spot) - call).abs() < 1e-9);
    }

    #[test]
    fn prop_american_kind_dispatch(
        strike in 50.0..150.0_f64,
        sig in 0.05..0.6_f64,
        rate in 0.02..0.1_f64,
        gap in 0.005..0.1_f64,
        spot in 50.0..150.0_f64,
    ) {
        // The perpetual call is only finite for b < r
        let carry = rate - gap;
        let mut option = AmericanOption::perpetual(strike, sig, rate, carry, 0.0, 0.0, "C").unwrap();
        prop_assert_eq!(
            option.price(spot),
            american::perpetual_call_price(strike, sig, rate, carry, spot)
        );
        option.toggle();
        prop_assert_eq!(
            option.price(spot),
            american::perpetual_put_price(strike, sig, rate, carry, spot)
        );
    }

    #[test]
    fn prop_american_finite_below_carry_bound(
        strike in 50.0..150.0_f64,
        sig in 0.05..0.6_f64,
        rate in 0.02..0.1_f64,
        gap in 0.005..0.1_f64,
        spot in 50.0..150.0_f64,
    ) {
        let carry = rate - gap;
        let call = american::perpetual_call_price(strike, sig, rate, carry, spot);
        let put = american::perpetual_put_price(strike, sig, rate, carry, spot);
        prop_assert!(call.is_finite() && call > 0.0, "call {} at b = {}, r = {}", call, carry, rate);
        prop_assert!(put.is_finite() && put > 0.0, "put {} at b = {}, r = {}", put, carry, rate);
    }
}
