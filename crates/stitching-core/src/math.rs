use nalgebra::Matrix3;

pub type Real = f64;

pub type Mat3 = Matrix3<Real>;
