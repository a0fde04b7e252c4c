//! 编辑网格
//!
//! 编辑模式下的网格数据：顶点（局部坐标 + 选择标记）与边。
//! 边的选择状态由两个端点推导：两端都被选中时边被选中。

use crate::error::SceneError;
use crate::math::{Point3, Vector3};

/// 顶点
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    /// 局部坐标
    pub co: Point3,
    /// 是否选中
    pub select: bool,
}

impl Vertex {
    pub fn new(co: Point3) -> Self {
        Self { co, select: false }
    }
}

/// 边（两个顶点索引）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub verts: [usize; 2],
}

/// 编辑网格
#[derive(Debug, Clone, Default)]
pub struct EditMesh {
    verts: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl EditMesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// 由顶点坐标和边索引构建网格
    pub fn from_geometry(
        positions: impl IntoIterator<Item = Point3>,
        edges: impl IntoIterator<Item = [usize; 2]>,
    ) -> Result<Self, SceneError> {
        let mut mesh = Self::new();
        for p in positions {
            mesh.add_vertex(p);
        }
        for [a, b] in edges {
            mesh.add_edge(a, b)?;
        }
        Ok(mesh)
    }

    /// 以原点为中心的立方体线框
    pub fn cube(size: f64) -> Self {
        let h = size / 2.0;
        let mut mesh = Self::new();
        for &(x, y, z) in &[
            (-h, -h, -h),
            (h, -h, -h),
            (h, h, -h),
            (-h, h, -h),
            (-h, -h, h),
            (h, -h, h),
            (h, h, h),
            (-h, h, h),
        ] {
            mesh.add_vertex(Point3::new(x, y, z));
        }
        const EDGES: [[usize; 2]; 12] = [
            [0, 1], [1, 2], [2, 3], [3, 0],
            [4, 5], [5, 6], [6, 7], [7, 4],
            [0, 4], [1, 5], [2, 6], [3, 7],
        ];
        for [a, b] in EDGES {
            mesh.edges.push(Edge { verts: [a, b] });
        }
        mesh
    }

    pub fn add_vertex(&mut self, co: Point3) -> usize {
        self.verts.push(Vertex::new(co));
        self.verts.len() - 1
    }

    pub fn add_edge(&mut self, a: usize, b: usize) -> Result<usize, SceneError> {
        self.check_index(a)?;
        self.check_index(b)?;
        if a == b {
            return Err(SceneError::DegenerateEdge(a));
        }
        self.edges.push(Edge { verts: [a, b] });
        Ok(self.edges.len() - 1)
    }

    fn check_index(&self, index: usize) -> Result<(), SceneError> {
        if index >= self.verts.len() {
            return Err(SceneError::VertexOutOfRange {
                index,
                len: self.verts.len(),
            });
        }
        Ok(())
    }

    pub fn verts(&self) -> &[Vertex] {
        &self.verts
    }

    pub fn verts_mut(&mut self) -> &mut [Vertex] {
        &mut self.verts
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.verts.len()
    }

    pub fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.verts.get(index)
    }

    // ========== 选择 ==========

    pub fn select_vertex(&mut self, index: usize, select: bool) -> Result<(), SceneError> {
        self.check_index(index)?;
        self.verts[index].select = select;
        Ok(())
    }

    pub fn toggle_vertex(&mut self, index: usize) -> Result<(), SceneError> {
        self.check_index(index)?;
        let v = &mut self.verts[index];
        v.select = !v.select;
        Ok(())
    }

    pub fn select_all(&mut self, select: bool) {
        for v in &mut self.verts {
            v.select = select;
        }
    }

    /// 选中的顶点，按索引顺序
    pub fn selected_vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.verts.iter().filter(|v| v.select)
    }

    pub fn selected_vertex_count(&self) -> usize {
        self.selected_vertices().count()
    }

    pub fn is_edge_selected(&self, edge: &Edge) -> bool {
        edge.verts.iter().all(|&i| self.verts[i].select)
    }

    pub fn selected_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(|e| self.is_edge_selected(e))
    }

    /// 切换到边选择模式时的选择刷新：不属于任何选中边的顶点取消选择
    pub fn flush_edge_selection(&mut self) {
        let mut keep = vec![false; self.verts.len()];
        for edge in self.edges.iter().filter(|e| self.is_edge_selected(e)) {
            for &i in &edge.verts {
                keep[i] = true;
            }
        }
        for (v, keep) in self.verts.iter_mut().zip(keep) {
            v.select &= keep;
        }
    }

    // ========== 几何 ==========

    pub fn edge_midpoint(&self, edge: &Edge) -> Point3 {
        let [a, b] = edge.verts;
        nalgebra::center(&self.verts[a].co, &self.verts[b].co)
    }

    /// 平移全部顶点（原点重定位时使用）
    pub fn translate(&mut self, offset: &Vector3) {
        for v in &mut self.verts {
            v.co += *offset;
        }
    }

    pub fn positions(&self) -> Vec<Point3> {
        self.verts.iter().map(|v| v.co).collect()
    }

    /// 用快照中的坐标覆盖当前坐标
    pub fn restore_positions(&mut self, positions: &[Point3]) -> Result<(), SceneError> {
        if positions.len() != self.verts.len() {
            return Err(SceneError::SnapshotMismatch {
                expected: self.verts.len(),
                actual: positions.len(),
            });
        }
        for (v, p) in self.verts.iter_mut().zip(positions) {
            v.co = *p;
        }
        Ok(())
    }
}
