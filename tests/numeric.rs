use dense2d::{arr1, arr2, Axis, ErrorKind, InterpolationMethod, NdArray, Shape};

#[test]
fn sum_prod_mean_over_axes()
{
    let a = arr2(&[[1., 2., 3.], [4., 5., 6.]]);
    assert_eq!(a.sum(Axis::None).item().unwrap(), 21.);
    assert_eq!(a.sum(Axis::Col).to_vec(), vec![6., 15.]);
    assert_eq!(a.sum(Axis::Row).to_vec(), vec![5., 7., 9.]);

    assert_eq!(a.prod(Axis::None).item().unwrap(), 720.);
    assert_eq!(a.prod(Axis::Col).to_vec(), vec![6., 120.]);

    assert_eq!(a.mean(Axis::None).item().unwrap(), 3.5);
    assert_eq!(a.mean(Axis::Col).to_vec(), vec![2., 5.]);
}

#[test]
fn row_axis_equals_col_axis_of_transpose()
{
    let a = arr2(&[[3, 1, 4], [1, 5, 9]]);
    assert_eq!(a.sum(Axis::Row), a.transpose().sum(Axis::Col));
    assert_eq!(a.min(Axis::Row).unwrap(), a.transpose().min(Axis::Col).unwrap());
    assert_eq!(a.max(Axis::Row).unwrap(), a.transpose().max(Axis::Col).unwrap());
    assert_eq!(a.cumsum(Axis::Row), a.transpose().cumsum(Axis::Col).transpose());
}

#[test]
fn min_max_and_arg_variants()
{
    let a = arr2(&[[5, 2], [8, 1]]);
    assert_eq!(a.min(Axis::None).unwrap().item().unwrap(), 1);
    assert_eq!(a.max(Axis::None).unwrap().item().unwrap(), 8);
    assert_eq!(a.min(Axis::Col).unwrap().to_vec(), vec![2, 1]);
    assert_eq!(a.max(Axis::Row).unwrap().to_vec(), vec![8, 2]);

    assert_eq!(a.argmin(Axis::None).unwrap().item().unwrap(), 3);
    assert_eq!(a.argmax(Axis::None).unwrap().item().unwrap(), 2);
    assert_eq!(a.argmin(Axis::Col).unwrap().to_vec(), vec![1, 1]);
}

#[test]
fn empty_reductions_error()
{
    let a: NdArray<f64> = NdArray::new(Shape::new(0, 0));
    assert_eq!(a.min(Axis::None).unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert_eq!(a.argmax(Axis::None).unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert_eq!(a.median(Axis::None).unwrap_err().kind(), ErrorKind::InvalidArgument);
}

#[test]
fn median_odd_and_even()
{
    assert_eq!(arr1(&[5., 1., 3.]).median(Axis::None).unwrap().item().unwrap(), 3.);
    assert_eq!(arr1(&[4., 1., 3., 2.]).median(Axis::None).unwrap().item().unwrap(), 2.5);
    // integer medians truncate toward zero on the even average
    assert_eq!(arr1(&[1, 2, 3, 4]).median(Axis::None).unwrap().item().unwrap(), 2);
}

#[test]
fn count_nonzero_and_cumsum()
{
    let a = arr2(&[[0, 1, 2], [3, 0, 0]]);
    assert_eq!(a.count_nonzero(Axis::None).item().unwrap(), 3);
    assert_eq!(a.count_nonzero(Axis::Col).to_vec(), vec![2, 1]);

    assert_eq!(a.cumsum(Axis::None).to_vec(), vec![0, 1, 3, 6, 6, 6]);
    let by_row = a.cumsum(Axis::Col);
    assert_eq!(by_row.shape(), a.shape());
    assert_eq!(by_row.to_vec(), vec![0, 1, 3, 3, 3, 3]);
}

#[test]
fn nan_aware_reductions_skip_nan()
{
    let a = arr1(&[1., f64::NAN, 3.]);
    assert_eq!(a.nanmean(Axis::None).item().unwrap(), 2.);
    assert_eq!(a.nanmedian(Axis::None).item().unwrap(), 2.);

    let all_nan = arr1(&[f64::NAN, f64::NAN]);
    assert!(all_nan.nanmean(Axis::None).item().unwrap().is_nan());
    assert!(all_nan.nanmedian(Axis::None).item().unwrap().is_nan());
}

#[test]
fn sort_in_place_is_seen_by_sharers()
{
    let mut a = arr2(&[[3., 1.], [2., 0.]]);
    let alias = a.clone();
    a.sort(Axis::None);
    assert_eq!(alias.to_vec(), vec![0., 1., 2., 3.]);

    let mut b = arr2(&[[3, 1], [0, 2]]);
    b.sort(Axis::Col);
    assert_eq!(b.to_vec(), vec![1, 3, 0, 2]);

    let mut c = arr2(&[[3, 1], [0, 2]]);
    c.sort(Axis::Row);
    assert_eq!(c.to_vec(), vec![0, 1, 3, 2]);
}

#[test]
fn argsort_is_stable()
{
    let a = arr1(&[3, 1, 2, 1]);
    assert_eq!(a.argsort(Axis::None).to_vec(), vec![1, 3, 2, 0]);

    let b = arr2(&[[2, 1], [1, 2]]);
    assert_eq!(b.argsort(Axis::Col).to_vec(), vec![1, 0, 0, 1]);
}

#[test]
fn unique_sorts_and_dedups()
{
    let a = arr2(&[[3, 1], [3, 2]]);
    let u = a.unique();
    assert_eq!(u.shape(), Shape::new(1, 3));
    assert_eq!(u.to_vec(), vec![1, 2, 3]);
}

#[test]
fn percentile_boundaries_are_min_and_max()
{
    let a = arr1(&[7., 1., 5., 3.]);
    let p0 = a.percentile(0., Axis::None, InterpolationMethod::Linear).unwrap();
    let p100 = a.percentile(100., Axis::None, InterpolationMethod::Linear).unwrap();
    assert_eq!(p0.item().unwrap(), 1.);
    assert_eq!(p100.item().unwrap(), 7.);
}

#[test]
fn percentile_interpolation_methods()
{
    let a = arr1(&[1., 2., 3., 4.]);
    // p = 50 brackets sorted indices 1 and 2
    let at = |m| a.percentile(50., Axis::None, m).unwrap().item().unwrap();
    assert_eq!(at(InterpolationMethod::Linear), 2.5);
    assert_eq!(at(InterpolationMethod::Lower), 2.);
    assert_eq!(at(InterpolationMethod::Higher), 3.);
    assert_eq!(at(InterpolationMethod::Midpoint), 2.5);
    // exact tie between the brackets favors the lower one
    assert_eq!(at(InterpolationMethod::Nearest), 2.);
}

#[test]
fn percentile_out_of_range_errors()
{
    let a = arr1(&[1., 2., 3.]);
    let err = a
        .percentile(150., Axis::None, InterpolationMethod::Linear)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn percentile_per_row()
{
    let a = arr2(&[[1., 2., 3.], [10., 20., 30.]]);
    let p = a
        .percentile(50., Axis::Col, InterpolationMethod::Linear)
        .unwrap();
    assert_eq!(p.to_vec(), vec![2., 20.]);
}

#[cfg(feature = "approx")]
#[test]
fn mean_of_a_linspace()
{
    use approx::assert_abs_diff_eq;
    use dense2d::linspace;

    let a = linspace(0., 1., 101);
    assert_abs_diff_eq!(a.mean(Axis::None), arr1(&[0.5]), epsilon = 1e-12);
}

#[test]
fn single_element_percentile()
{
    let a = arr1(&[42.]);
    for m in [
        InterpolationMethod::Linear,
        InterpolationMethod::Lower,
        InterpolationMethod::Higher,
        InterpolationMethod::Nearest,
        InterpolationMethod::Midpoint,
    ] {
        assert_eq!(a.percentile(75., Axis::None, m).unwrap().item().unwrap(), 42.);
    }
}
