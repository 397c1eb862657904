use crate::core::marker::EdgeType;

/// Number of cells needed for a matrix of `capacity` vertices. Undirected
/// graphs store only the lower triangle including the diagonal.
pub fn size_of<Ty: EdgeType>(capacity: usize) -> usize {
    if Ty::is_directed() {
        capacity * capacity
    } else {
        capacity * (capacity + 1) / 2
    }
}

/// Grows the matrix from `prev_capacity` to `capacity` vertices, keeping the
/// existing cells at their coordinates.
pub fn resize<E, Ty: EdgeType>(prev: &mut Vec<Option<E>>, prev_capacity: usize, capacity: usize) {
    let len = size_of::<Ty>(capacity);

    if capacity <= prev_capacity {
        return;
    }

    if Ty::is_directed() {
        let mut next = Vec::with_capacity(len);

        for (i, value) in std::mem::take(prev).into_iter().enumerate() {
            next.push(value);

            // Are we on the right edge of the original square?
            if (i + 1) % prev_capacity == 0 {
                next.resize_with(next.len() + capacity - prev_capacity, || None);
            }
        }

        // Add the bottom rectangle.
        next.resize_with(len, || None);
        *prev = next;
    } else {
        // Just continue the lower triangle.
        prev.resize_with(len, || None);
    }
}

pub fn index<Ty: EdgeType>(row: usize, col: usize, capacity: usize) -> usize {
    if Ty::is_directed() {
        row * capacity + col
    } else {
        // Make sure that the coordinates are in the lower triangle.
        let (row, col) = if row >= col { (row, col) } else { (col, row) };
        row * (row + 1) / 2 + col
    }
}

pub fn coords<Ty: EdgeType>(index: usize, capacity: usize) -> (usize, usize) {
    if Ty::is_directed() {
        (index / capacity, index % capacity)
    } else {
        // index = row * (row + 1) / 2 + col, solve the quadratic equation for
        // row with col = 0 and round down.
        let d = (1. + 8. * index as f64).sqrt().floor() as usize;
        let row = (d - 1) / 2;
        let col = index - row * (row + 1) / 2;
        (row, col)
    }
}
