use dense2d::{
    add, append, arr1, arr2, average, average_weighted, bincount, bincount_weighted, cross, diff,
    divide, dot, gcd, interp, lcm, multiply, ones, subtract, zeros, Axis, ErrorKind, NdArray,
    Shape,
};

#[test]
fn checked_arithmetic_errors_instead_of_panicking()
{
    let a = arr1(&[1, 2, 3]);
    let b = arr1(&[4, 5, 6]);
    assert_eq!(add(&a, &b).unwrap().to_vec(), vec![5, 7, 9]);
    assert_eq!(subtract(&b, &a).unwrap().to_vec(), vec![3, 3, 3]);
    assert_eq!(multiply(&a, &b).unwrap().to_vec(), vec![4, 10, 18]);
    assert_eq!(divide(&b, &a).unwrap().to_vec(), vec![4, 2, 2]);

    let short = arr1(&[1, 2]);
    assert_eq!(add(&a, &short).unwrap_err().kind(), ErrorKind::InvalidArgument);
}

#[test]
fn append_stacks_rows()
{
    let a: NdArray<f64> = zeros(Shape::new(2, 3));
    let b = ones(Shape::new(1, 3));
    let c = append(&a, &b, Axis::Row).unwrap();
    assert_eq!(c.shape(), Shape::new(3, 3));
    assert_eq!(c.row(2).unwrap().to_vec(), vec![1., 1., 1.]);
    assert_eq!(c.row(0).unwrap().to_vec(), vec![0., 0., 0.]);
}

#[test]
fn append_extends_columns_and_flattens()
{
    let a = arr2(&[[1, 2], [3, 4]]);
    let b = arr2(&[[5], [6]]);
    let c = append(&a, &b, Axis::Col).unwrap();
    assert_eq!(c.shape(), Shape::new(2, 3));
    assert_eq!(c.to_vec(), vec![1, 2, 5, 3, 4, 6]);

    let flat = append(&a, &b, Axis::None).unwrap();
    assert_eq!(flat.shape(), Shape::new(1, 6));

    assert_eq!(append(&a, &arr1(&[1, 2, 3]), Axis::Row).unwrap_err().kind(),
               ErrorKind::InvalidArgument);
    assert_eq!(append(&a, &arr2(&[[1, 2]]), Axis::Col).unwrap_err().kind(),
               ErrorKind::InvalidArgument);
}

#[test]
fn averages()
{
    let a = arr2(&[[1., 2.], [3., 4.]]);
    assert_eq!(average(&a, Axis::None).item().unwrap(), 2.5);

    let w = arr1(&[1., 3.]);
    // per-row weighted averages, one weight per column
    let avg = average_weighted(&a, &w, Axis::Col).unwrap();
    assert_eq!(avg.to_vec(), vec![1.75, 3.75]);

    let bad = average_weighted(&a, &arr1(&[1., 2., 3.]), Axis::Col).unwrap_err();
    assert_eq!(bad.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn bincount_counts_clipped_values()
{
    let a = arr1(&[0, 1, 1, 2, 2, 2]);
    assert_eq!(bincount(&a, 0).unwrap().to_vec(), vec![1, 2, 3]);
    // negatives are clipped to zero before counting
    assert_eq!(bincount(&arr1(&[-1, 0, 2]), 0).unwrap().to_vec(), vec![2, 0, 1]);
    // min_length pads with zeros
    assert_eq!(bincount(&a, 5).unwrap().to_vec(), vec![1, 2, 3, 0, 0]);
}

#[test]
fn bincount_weighted_sums_weights()
{
    let a = arr1(&[0, 1, 1, 2]);
    let w = arr1(&[5, 1, 2, 7]);
    assert_eq!(bincount_weighted(&a, &w, 0).unwrap().to_vec(), vec![5, 3, 7]);

    let bad = bincount_weighted(&a, &arr1(&[1, 2]), 0).unwrap_err();
    assert_eq!(bad.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn cross_products()
{
    let a = arr1(&[1., 0., 0.]);
    let b = arr1(&[0., 1., 0.]);
    assert_eq!(cross(&a, &b, Axis::None).unwrap().to_vec(), vec![0., 0., 1.]);

    // 2-vectors yield the scalar z component
    let z = cross(&arr1(&[1., 2.]), &arr1(&[3., 4.]), Axis::None).unwrap();
    assert_eq!(z.to_vec(), vec![-2.]);

    // one vector per row
    let m = arr2(&[[1., 0., 0.], [0., 1., 0.]]);
    let n = arr2(&[[0., 1., 0.], [0., 0., 1.]]);
    let c = cross(&m, &n, Axis::Col).unwrap();
    assert_eq!(c.shape(), Shape::new(2, 3));
    assert_eq!(c.row(0).unwrap().to_vec(), vec![0., 0., 1.]);
    assert_eq!(c.row(1).unwrap().to_vec(), vec![1., 0., 0.]);

    let err = cross(&arr1(&[1., 2., 3., 4.]), &arr1(&[1., 2., 3., 4.]), Axis::None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn interp_evaluates_piecewise_linear()
{
    let y = interp(&arr1(&[1.5]), &arr1(&[1., 2.]), &arr1(&[10., 20.])).unwrap();
    assert_eq!(y.to_vec(), vec![15.]);

    // control points need not be pre-sorted
    let y = interp(&arr1(&[0.5, 2.5]), &arr1(&[3., 0., 2.]), &arr1(&[30., 0., 20.])).unwrap();
    assert_eq!(y.to_vec(), vec![5., 25.]);

    let out_of_range = interp(&arr1(&[5.]), &arr1(&[0., 2.]), &arr1(&[0., 20.])).unwrap_err();
    assert_eq!(out_of_range.kind(), ErrorKind::InvalidArgument);

    let mismatched = interp(&arr1(&[1.]), &arr1(&[0., 2.]), &arr1(&[0.])).unwrap_err();
    assert_eq!(mismatched.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn dot_inner_product_and_matmul()
{
    let a = arr1(&[1., 2., 3.]);
    let b = arr1(&[4., 5., 6.]);
    assert_eq!(dot(&a, &b).unwrap().item().unwrap(), 32.);

    let m = arr2(&[[1., 2.], [3., 4.]]);
    let n = arr2(&[[5., 6.], [7., 8.]]);
    let p = dot(&m, &n).unwrap();
    assert_eq!(p.shape(), Shape::new(2, 2));
    assert_eq!(p.to_vec(), vec![19., 22., 43., 50.]);

    let bad = dot(&m, &arr2(&[[1., 2.]])).unwrap_err();
    assert_eq!(bad.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn diff_over_axes()
{
    let a = arr2(&[[1, 4, 9], [16, 25, 36]]);
    assert_eq!(diff(&a, Axis::None).to_vec(), vec![3, 5, 7, 9, 11]);

    let by_row = diff(&a, Axis::Col);
    assert_eq!(by_row.shape(), Shape::new(2, 2));
    assert_eq!(by_row.to_vec(), vec![3, 5, 9, 11]);

    let by_col = diff(&a, Axis::Row);
    assert_eq!(by_col.shape(), Shape::new(1, 3));
    assert_eq!(by_col.to_vec(), vec![15, 21, 27]);
}

#[test]
fn gcd_and_lcm_fold_the_whole_array()
{
    let a = arr1(&[12u32, 18, 24]);
    assert_eq!(gcd(&a).unwrap(), 6);
    assert_eq!(lcm(&arr1(&[2u32, 3, 4])).unwrap(), 12);

    let empty: NdArray<u32> = NdArray::new(Shape::new(0, 0));
    assert_eq!(gcd(&empty).unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert_eq!(lcm(&empty).unwrap_err().kind(), ErrorKind::InvalidArgument);
}
