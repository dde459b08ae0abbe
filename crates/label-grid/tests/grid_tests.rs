use label_grid::*;

#[test]
fn test_unit_round_trip() {
    for (magnitude, unit) in [(210.0, "mm"), (2.5, "in"), (-3.25, "cm"), (0.0, "pt")] {
        let raw = RawValue::from(format!("{}{}", magnitude, unit));
        let parsed = parse_numeric(Some(&raw)).unwrap();
        assert_eq!(parsed, NumericValue::new(magnitude, Some(unit)));

        let parsed = parse_numeric(Some(&RawValue::Float(magnitude))).unwrap();
        assert_eq!(parsed, NumericValue::new(magnitude, None));
    }
}

#[test]
fn test_columns_derived_from_elements() {
    for rows in 1..=6 {
        for elements in 1..=30 {
            let dims = GridDimensions::new(Some(rows), None, Some(elements)).unwrap();
            assert_eq!(dims.columns(), elements.div_ceil(rows));
            assert!(dims.columns() > 0);
            assert!(dims.cells() >= elements);
        }
        assert!(matches!(
            GridDimensions::new(Some(rows), None, Some(0)),
            Err(LabelError::InvalidArguments(_))
        ));
        assert!(matches!(
            GridDimensions::new(None, Some(rows), Some(0)),
            Err(LabelError::InvalidArguments(_))
        ));
    }
}

#[test]
fn test_rows_by_columns_leaves_elements_unset() {
    let dims = GridDimensions::new(Some(4), Some(5), None).unwrap();
    assert_eq!(dims.elements(), None);
    assert_eq!(dims.cells(), 20);
}

#[test]
fn test_fill_orders_agree_on_first_cell() {
    let dims = GridDimensions::new(Some(3), Some(4), None).unwrap();
    assert_eq!(
        dims.position(1, FillOrder::ByRow).unwrap(),
        dims.position(1, FillOrder::ByColumn).unwrap()
    );
    assert_eq!(
        dims.position(12, FillOrder::ByRow).unwrap(),
        GridPosition::new(3, 4)
    );
    assert_eq!(
        dims.position(12, FillOrder::ByColumn).unwrap(),
        GridPosition::new(3, 4)
    );
}

#[test]
fn test_fourth_element_by_column() {
    let dims = GridDimensions::new(Some(3), Some(3), None).unwrap();
    assert_eq!(dims.position_by_column(4).unwrap(), GridPosition::new(1, 2));
}

#[test]
fn test_page_geometry_and_fit() {
    let page = PageGeometry {
        width: 210.0,
        height: 297.0,
        margins: PageMargins {
            top: 14.0,
            bottom: 14.0,
            left: 6.0,
            right: 6.0,
        },
    };
    let area = page.printable_area();
    assert_eq!(area, Rect::new(6.0, 14.0, 198.0, 269.0));
    assert_eq!(area.right(), 204.0);
    assert_eq!(area.bottom(), 283.0);

    let grid = GridLayout::new(
        GridDimensions::new(Some(8), Some(3), None).unwrap(),
        area,
        ElementExtent::Size(64.0),
        ElementExtent::Size(32.0),
    );
    assert_eq!(grid.column_width(), 66.0);
    assert_eq!(grid.column_element_offset(), 2.0);
    assert_eq!(grid.column_edge_offset(), 1.0);
    assert_eq!((grid.column_element_offset() + grid.element_width) * 3.0, 198.0);
    assert!(check_fit(&grid, &page, "mm").fits());

    let cell = grid.cell_bounds(GridPosition::new(2, 3));
    let element = grid.element_bounds(GridPosition::new(2, 3));
    assert_eq!(cell.x, 138.0);
    assert_eq!(element.x, 139.0);
    assert_eq!(element.width, 64.0);
    assert!(element.y > cell.y && element.bottom() < cell.bottom());
}
