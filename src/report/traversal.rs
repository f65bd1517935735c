use crate::model::PeakGroup;

/// Visit `entry` and all of its descendants in pre-order.
///
/// Before a child is visited its `meta_group_id` is overwritten with its
/// parent's, so the whole subtree ends up sharing the entry's id. `visit`
/// receives each group with the mean m/z of its parent (`parent_mz` for the
/// entry itself). Uses an explicit stack, so deep trees do not recurse.
pub fn walk_preorder<E, F>(entry: &mut PeakGroup, parent_mz: Option<f32>, mut visit: F) -> Result<(), E>
where
    F: FnMut(&PeakGroup, Option<f32>) -> Result<(), E>,
{
    let mut stack: Vec<(&mut PeakGroup, Option<f32>)> = vec![(entry, parent_mz)];

    while let Some((node, parent_mz)) = stack.pop() {
        visit(node, parent_mz)?;

        let meta_group_id = node.meta_group_id;
        let mean_mz = node.mean_mz;
        for child in node.children.iter_mut().rev() {
            child.meta_group_id = meta_group_id;
            stack.push((child, Some(mean_mz)));
        }
    }

    Ok(())
}
