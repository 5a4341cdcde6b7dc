use super::edge::{EdgeBackend, LaneOffsets};

/// Backend con instrucciones vectoriales nativas (AVX2 en x86_64, NEON en aarch64).
///
/// Sólo se puede construir con `detect`, que comprueba la CPU en tiempo de ejecución.
#[derive(Clone, Copy, Debug)]
pub struct SimdEdgeBackend {
    _detected: (),
}

impl SimdEdgeBackend {
    #[cfg(target_arch = "x86_64")]
    pub fn detect() -> Option<Self> {
        if is_x86_feature_detected!("avx2") {
            Some(Self { _detected: () })
        } else {
            None
        }
    }

    // NEON forma parte de la base de aarch64
    #[cfg(target_arch = "aarch64")]
    pub fn detect() -> Option<Self> {
        Some(Self { _detected: () })
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    pub fn detect() -> Option<Self> {
        None
    }
}

impl EdgeBackend for SimdEdgeBackend {
    #[cfg(target_arch = "x86_64")]
    fn inside_mask(&self, edges: [i32; 3], offsets: &LaneOffsets) -> u32 {
        // SAFETY: el backend sólo existe si `detect` encontró AVX2.
        unsafe { avx2::inside_mask(edges, offsets) }
    }

    #[cfg(target_arch = "aarch64")]
    fn inside_mask(&self, edges: [i32; 3], offsets: &LaneOffsets) -> u32 {
        // SAFETY: NEON siempre está disponible en aarch64.
        unsafe { neon::inside_mask(edges, offsets) }
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    fn inside_mask(&self, _edges: [i32; 3], _offsets: &LaneOffsets) -> u32 {
        unreachable!("SimdEdgeBackend::detect nunca devuelve un backend en esta arquitectura")
    }

    fn name(&self) -> &'static str {
        if cfg!(target_arch = "x86_64") {
            "avx2"
        } else {
            "neon"
        }
    }
}

#[cfg(target_arch = "x86_64")]
mod avx2 {
    use super::LaneOffsets;
    use std::arch::x86_64::*;

    #[target_feature(enable = "avx2")]
    pub unsafe fn inside_mask(edges: [i32; 3], offsets: &LaneOffsets) -> u32 {
        let LaneOffsets(offsets) = offsets;

        // Valor de la fila difundido + desplazamiento de cada carril
        let e0 = _mm256_add_epi32(
            _mm256_set1_epi32(edges[0]),
            _mm256_loadu_si256(offsets[0].as_ptr() as *const __m256i),
        );
        let e1 = _mm256_add_epi32(
            _mm256_set1_epi32(edges[1]),
            _mm256_loadu_si256(offsets[1].as_ptr() as *const __m256i),
        );
        let e2 = _mm256_add_epi32(
            _mm256_set1_epi32(edges[2]),
            _mm256_loadu_si256(offsets[2].as_ptr() as *const __m256i),
        );

        let zero = _mm256_setzero_si256();
        let any_negative = _mm256_or_si256(_mm256_or_si256(e0, e1), e2);
        let any_positive = _mm256_or_si256(
            _mm256_or_si256(_mm256_sub_epi32(zero, e0), _mm256_sub_epi32(zero, e1)),
            _mm256_sub_epi32(zero, e2),
        );

        // Bit de signo activo = carril fuera
        let outside = _mm256_and_si256(any_negative, any_positive);
        let outside_bits = _mm256_movemask_ps(_mm256_castsi256_ps(outside)) as u32;
        !outside_bits & 0xFF
    }
}

#[cfg(target_arch = "aarch64")]
mod neon {
    use super::LaneOffsets;
    use std::arch::aarch64::*;

    // Mitad de 4 carriles: devuelve sus 4 bits de "fuera"
    #[inline]
    unsafe fn outside_bits(edges: [i32; 3], offsets: &[[i32; 8]; 3], half: usize) -> u32 {
        let base = half * 4;
        let e0 = vaddq_s32(vdupq_n_s32(edges[0]), vld1q_s32(offsets[0][base..].as_ptr()));
        let e1 = vaddq_s32(vdupq_n_s32(edges[1]), vld1q_s32(offsets[1][base..].as_ptr()));
        let e2 = vaddq_s32(vdupq_n_s32(edges[2]), vld1q_s32(offsets[2][base..].as_ptr()));

        let any_negative = vorrq_s32(vorrq_s32(e0, e1), e2);
        let any_positive = vorrq_s32(vorrq_s32(vnegq_s32(e0), vnegq_s32(e1)), vnegq_s32(e2));
        let outside = vcltzq_s32(vandq_s32(any_negative, any_positive));

        let weights: [u32; 4] = [1, 2, 4, 8];
        vaddvq_u32(vandq_u32(outside, vld1q_u32(weights.as_ptr())))
    }

    pub unsafe fn inside_mask(edges: [i32; 3], offsets: &LaneOffsets) -> u32 {
        let LaneOffsets(offsets) = offsets;
        let outside = outside_bits(edges, offsets, 0) | (outside_bits(edges, offsets, 1) << 4);
        !outside & 0xFF
    }
}
