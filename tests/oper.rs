use dense2d::{arr1, arr2, NdArray, Shape};

#[test]
fn elementwise_binary_ops()
{
    let a = arr2(&[[1, 2], [3, 4]]);
    let b = arr2(&[[10, 20], [30, 40]]);
    assert_eq!((&a + &b).to_vec(), vec![11, 22, 33, 44]);
    assert_eq!((&b - &a).to_vec(), vec![9, 18, 27, 36]);
    assert_eq!((&a * &b).to_vec(), vec![10, 40, 90, 160]);
    assert_eq!((&b / &a).to_vec(), vec![10, 10, 10, 10]);
}

#[test]
fn owned_operand_combinations()
{
    let a = arr1(&[1, 2, 3]);
    let b = arr1(&[4, 5, 6]);
    assert_eq!((a.clone() + b.clone()).to_vec(), vec![5, 7, 9]);
    assert_eq!((a.clone() + &b).to_vec(), vec![5, 7, 9]);
    assert_eq!((&a + b).to_vec(), vec![5, 7, 9]);
}

#[test]
fn scalar_on_either_side()
{
    let a: NdArray<f64> = arr1(&[1., 2., 3.]);
    assert_eq!((&a + 1.).to_vec(), vec![2., 3., 4.]);
    assert_eq!((&a * 2.).to_vec(), vec![2., 4., 6.]);
    assert_eq!((10. - &a).to_vec(), vec![9., 8., 7.]);
    assert_eq!((6. / &a).to_vec(), vec![6., 3., 2.]);
    assert_eq!((2 * arr1::<i32>(&[1, 2, 3])).to_vec(), vec![2, 4, 6]);
}

#[test]
fn result_keeps_operand_shape()
{
    let a = arr2(&[[1, 2, 3], [4, 5, 6]]);
    let sum = &a + &a;
    assert_eq!(sum.shape(), Shape::new(2, 3));
}

#[test]
fn compound_assign_writes_through_shared_storage()
{
    let mut a = arr1(&[1, 2, 3]);
    let alias = a.clone();
    a += &arr1(&[10, 10, 10]);
    assert_eq!(alias.to_vec(), vec![11, 12, 13]);

    a *= 2;
    assert_eq!(alias.to_vec(), vec![22, 24, 26]);

    a -= 2;
    a /= 2;
    assert_eq!(alias.to_vec(), vec![10, 11, 12]);
}

#[test]
fn self_addition_through_an_alias()
{
    // lhs and rhs may share one buffer
    let a = arr1(&[1, 2, 3]);
    let b = a.clone();
    assert_eq!((&a + &b).to_vec(), vec![2, 4, 6]);

    let mut c = arr1(&[1, 2, 3]);
    let d = c.clone();
    c += &d;
    assert_eq!(c.to_vec(), vec![2, 4, 6]);
}

#[test]
fn negation()
{
    let a = arr1(&[1, -2, 3]);
    assert_eq!((-&a).to_vec(), vec![-1, 2, -3]);
    assert_eq!((-a).to_vec(), vec![-1, 2, -3]);
}

#[test]
#[should_panic]
fn mismatched_shapes_panic()
{
    let a: NdArray<i32> = arr2(&[[1, 2], [3, 4]]);
    let b = arr1(&[1, 2, 3]);
    let _ = &a + &b;
}

#[test]
#[should_panic]
fn mismatched_assign_panics()
{
    let mut a = arr1(&[1, 2, 3]);
    a += &arr1(&[1, 2]);
}
