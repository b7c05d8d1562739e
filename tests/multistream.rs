use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smoothie::{
    AnyFilter, ExponentialFilter, Filter, FilterConfig, FilterError, HighPassFilter,
    LowPassFilter, MovingAverageFilter, MultiStreamFilter, RcCircuit,
};

fn prototypes() -> Vec<AnyFilter> {
    vec![
        ExponentialFilter::new(0.3).unwrap().into(),
        MovingAverageFilter::new(6).unwrap().into(),
        LowPassFilter::from_components(100.0, 1e-3, 0.01).unwrap().into(),
        HighPassFilter::new(0.2, 0.01).unwrap().into(),
    ]
}

#[test]
fn two_channels_match_independent_filters() {
    let mut rng = StdRng::seed_from_u64(2024);

    for prototype in prototypes() {
        let mut multi = MultiStreamFilter::new(&prototype, 2).unwrap();
        let mut a = prototype.duplicate();
        let mut b = prototype.duplicate();

        for _ in 0..500 {
            let x = rng.gen_range(-1.0..1.0);
            let z = rng.gen_range(-50.0..50.0);
            let out = multi.apply(&[x, z]).unwrap();
            assert_eq!(out, vec![a.apply(x), b.apply(z)], "{}", prototype.name());
        }
    }
}

#[test]
fn channel_order_does_not_matter() {
    let prototype: AnyFilter = MovingAverageFilter::new(4).unwrap().into();
    let mut forward = MultiStreamFilter::new(&prototype, 3).unwrap();
    let mut reversed = MultiStreamFilter::new(&prototype, 3).unwrap();

    for k in 0..40 {
        let sample = [k as f64, (k * k) as f64, -(k as f64)];
        let mut flipped = sample;
        flipped.reverse();

        let mut out_reversed = reversed.apply_array(flipped).unwrap();
        out_reversed.reverse();
        assert_eq!(forward.apply_array(sample).unwrap(), out_reversed);
    }
}

#[test]
fn wrong_length_is_configuration_mismatch() {
    let mut multi = MultiStreamFilter::from_config(
        &FilterConfig::LowPass {
            circuit: RcCircuit::TimeConstant(0.1),
            dt: 0.01,
        },
        2,
    )
    .unwrap();

    assert_eq!(
        multi.apply(&[1.0]),
        Err(FilterError::ConfigurationMismatch {
            expected: 2,
            actual: 1
        })
    );
    assert_eq!(
        multi.apply(&[1.0, 2.0, 3.0]),
        Err(FilterError::ConfigurationMismatch {
            expected: 2,
            actual: 3
        })
    );
    assert!(multi.apply(&[]).is_err());
    assert!(multi.apply(&[1.0, 2.0]).is_ok());
}

#[test]
fn reset_and_resize_apply_to_every_channel() {
    let prototype = MovingAverageFilter::new(3).unwrap();
    let mut multi = MultiStreamFilter::new(&prototype, 4).unwrap();
    for _ in 0..5 {
        multi.apply(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    }

    multi.reset();
    assert_eq!(
        multi.apply(&[3.0, 6.0, 9.0, 12.0]).unwrap(),
        vec![1.0, 2.0, 3.0, 4.0]
    );

    multi.resize(1).unwrap();
    for i in 0..multi.channels() {
        assert_eq!(multi.channel(i).map(MovingAverageFilter::window), Some(1));
    }
    assert_eq!(
        multi.apply(&[3.0, 6.0, 9.0, 12.0]).unwrap(),
        vec![3.0, 6.0, 9.0, 12.0]
    );
}
