use std::path::PathBuf;

use dense2d::{arr1, arr2, fromfile, load, DataCube, ErrorKind, NdArray, Shape};

fn temp_path(name: &str) -> PathBuf
{
    let mut p = std::env::temp_dir();
    p.push(format!("dense2d-{}-{}", std::process::id(), name));
    p
}

#[test]
fn binary_dump_round_trips()
{
    let path = temp_path("dump-roundtrip.bin");
    let a = arr2(&[[1.5f64, -2.0], [0.25, 1e9]]);
    a.dump(&path).unwrap();

    let b: NdArray<f64> = load(&path).unwrap();
    // the dump is headerless; it comes back as a row vector
    assert_eq!(b.shape(), Shape::new(1, 4));
    let mut b = b;
    b.reshape(2, 2).unwrap();
    assert_eq!(b, a);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn load_rejects_a_truncated_file()
{
    let path = temp_path("truncated.bin");
    std::fs::write(&path, [0u8; 7]).unwrap();

    let err = load::<f64, _>(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn load_errors_on_a_missing_file()
{
    let err = load::<f64, _>(temp_path("does-not-exist.bin")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn text_round_trip_with_separator()
{
    let path = temp_path("values.txt");
    let a = arr1(&[1i32, -2, 3]);
    a.tofile(&path, ", ").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "1, -2, 3");

    let b: NdArray<i32> = fromfile(&path, ",").unwrap();
    assert_eq!(b.to_vec(), vec![1, -2, 3]);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn fromfile_rejects_garbage()
{
    let path = temp_path("garbage.txt");
    std::fs::write(&path, "1,two,3").unwrap();

    let err = fromfile::<i32, _>(&path, ",").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn datacube_enforces_a_common_shape()
{
    let mut cube = DataCube::new();
    cube.push(arr2(&[[1, 2], [3, 4]])).unwrap();
    cube.push(arr2(&[[5, 6], [7, 8]])).unwrap();
    assert_eq!(cube.len(), 2);
    assert_eq!(cube.shape(), Shape::new(2, 2));
    assert_eq!(cube.at(1).unwrap().to_vec(), vec![5, 6, 7, 8]);
    assert_eq!(cube.at(2).unwrap_err().kind(), ErrorKind::OutOfBounds);

    let err = cube.push(arr1(&[1, 2])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn datacube_stores_shared_handles()
{
    let mut a = arr2(&[[1, 2], [3, 4]]);
    let mut cube = DataCube::new();
    cube.push(a.clone()).unwrap();
    a.set(0, 0, 99).unwrap();
    assert_eq!(cube.at(0).unwrap().at(0, 0).unwrap(), 99);
}

#[test]
fn datacube_dump_concatenates_frames()
{
    let path = temp_path("cube.bin");
    let mut cube = DataCube::new();
    cube.push(arr1(&[1.0f64, 2.0])).unwrap();
    cube.push(arr1(&[3.0f64, 4.0])).unwrap();
    cube.dump(&path).unwrap();

    let flat: NdArray<f64> = load(&path).unwrap();
    assert_eq!(flat.to_vec(), vec![1., 2., 3., 4.]);

    std::fs::remove_file(&path).unwrap();
}
