use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

/// Límite de las coordenadas enteras de un vértice.
///
/// Las funciones de arista se evalúan en coordenadas duplicadas (centro de píxel)
/// con aritmética `i32`: con |x|, |y| <= 8192 el valor absoluto queda por debajo
/// de 2^31. Lienzos mayores se rechazan en la configuración.
pub const MAX_COORDINATE: i32 = 8192;

/// Tupla numérica de tres componentes: punto 2D/3D o color RGB.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

/// Color RGB con componentes flotantes, normalmente en [0, 1].
pub type Color = Vector3<f32>;

impl<T> Vector3<T> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: Copy> Vector3<T> {
    pub fn to_array(&self) -> [T; 3] {
        [self.x, self.y, self.z]
    }
}

impl Vector3<f32> {
    pub const BLACK: Color = Vector3::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Vector3::new(1.0, 1.0, 1.0);

    // Alias de canal cuando el vector se usa como color
    pub fn r(&self) -> f32 {
        self.x
    }

    pub fn g(&self) -> f32 {
        self.y
    }

    pub fn b(&self) -> f32 {
        self.z
    }
}

impl<T: Add<Output = T>> Add for Vector3<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: AddAssign> AddAssign for Vector3<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl<T: Sub<Output = T>> Sub for Vector3<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: SubAssign> SubAssign for Vector3<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl<T: Mul<Output = T> + Copy> Mul<T> for Vector3<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl<T: Div<Output = T> + Copy> Div<T> for Vector3<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl<T: fmt::Display> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Coordenada entera de píxel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point2i {
    pub x: i32,
    pub y: i32,
}

impl Point2i {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Trunca un vértice flotante a coordenadas de píxel.
    ///
    /// La conversión `as` satura (NaN pasa a 0) y el resultado se limita a
    /// ±`MAX_COORDINATE`.
    pub fn from_vector(v: &Vector3<f32>) -> Self {
        Self::new(
            (v.x as i32).clamp(-MAX_COORDINATE, MAX_COORDINATE),
            (v.y as i32).clamp(-MAX_COORDINATE, MAX_COORDINATE),
        )
    }
}

impl From<(i32, i32)> for Point2i {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}
