use super::edge::{sign_combined_inside, CpuEdgeBackend, EdgeBackend, LaneOffsets, LANES};

impl EdgeBackend for CpuEdgeBackend {
    fn inside_mask(&self, edges: [i32; 3], offsets: &LaneOffsets) -> u32 {
        let LaneOffsets(offsets) = offsets;
        let mut mask = 0u32;
        for lane in 0..LANES {
            let e0 = edges[0] + offsets[0][lane];
            let e1 = edges[1] + offsets[1][lane];
            let e2 = edges[2] + offsets[2][lane];
            if sign_combined_inside(e0, e1, e2) {
                mask |= 1 << lane;
            }
        }
        mask
    }

    fn name(&self) -> &'static str {
        "cpu"
    }
}
