// =========================================================================
// Property contracts for the Matrix kernel.
//
// These suites falsify the algebraic laws the inference pipeline leans
// on: softmax must land on the probability simplex and ignore logit
// shifts, tanh must stay inside (-1, 1), and the structural ops must
// respect their shape laws.
//
// References:
//   - Golub & Van Loan (2013) "Matrix Computations"
//   - Bridle (1990) "Probabilistic Interpretation of Feedforward
//     Classification Network Outputs"
// =========================================================================

use super::Matrix;
use proptest::prelude::*;

fn finite_row(len: usize) -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-50.0f32..50.0, len)
}

proptest! {
    #[test]
    fn softmax_outputs_form_a_simplex(data in finite_row(10)) {
        let m = Matrix::from_vec(1, 10, data).expect("valid");
        let out = m.softmax();

        prop_assert!(out.as_slice().iter().all(|&p| p >= 0.0));
        let total: f32 = out.as_slice().iter().sum();
        prop_assert!((total - 1.0).abs() < 1e-6, "sum = {total}");
    }

    #[test]
    fn softmax_is_shift_invariant(data in finite_row(10), shift in -20.0f32..20.0) {
        let m = Matrix::from_vec(1, 10, data).expect("valid");
        let a = m.softmax();
        let b = m.add_scalar(shift).softmax();

        for (x, y) in a.as_slice().iter().zip(b.as_slice()) {
            prop_assert!((x - y).abs() < 1e-5, "{x} vs {y} after shift {shift}");
        }
    }

    #[test]
    fn tanh_is_bounded(data in finite_row(16)) {
        // Closed interval: f32 tanh rounds to exactly +/-1.0 beyond |x| ~ 9.
        let m = Matrix::from_vec(1, 16, data).expect("valid");
        let out = m.tanh();
        prop_assert!(out.as_slice().iter().all(|&v| (-1.0..=1.0).contains(&v)));
    }

    #[test]
    fn transpose_is_an_involution(data in finite_row(12)) {
        let m = Matrix::from_vec(3, 4, data).expect("valid");
        prop_assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn add_commutes_on_equal_shapes(a in finite_row(6), b in finite_row(6)) {
        let ma = Matrix::from_vec(2, 3, a).expect("valid");
        let mb = Matrix::from_vec(2, 3, b).expect("valid");
        let ab = ma.add(&mb).expect("equal shapes");
        let ba = mb.add(&ma).expect("equal shapes");
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn matmul_shape_law(rows in 1usize..5, inner in 1usize..5, cols in 1usize..5) {
        let a = Matrix::zeros(rows, inner);
        let b = Matrix::zeros(inner, cols);
        let c = a.matmul(&b).expect("inner dimensions agree");
        prop_assert_eq!(c.shape(), (rows, cols));
    }

    #[test]
    fn inverse_recovers_identity(data in prop::collection::vec(-5.0f32..5.0, 4)) {
        let m = Matrix::from_vec(2, 2, data).expect("valid");
        let det = m.determinant().expect("square");
        // Skip near-singular draws; the law only holds away from det = 0.
        prop_assume!(det.abs() > 0.5);

        let prod = m.inverse().expect("non-singular").matmul(&m).expect("2x2");
        let eye = Matrix::eye(2);
        for i in 0..2 {
            for j in 0..2 {
                prop_assert!((prod.get(i, j) - eye.get(i, j)).abs() < 1e-2);
            }
        }
    }
}
