#[cfg(test)]
mod tests {
    use crate::tlc_engine::common::shapes::Rect;
    use crate::tlc_engine::export::write_csv;
    use crate::tlc_engine::geometry::Geometry;

    fn to_string(geometry: &Geometry, decimals: usize) -> String {
        let mut out = Vec::new();
        write_csv(geometry, decimals, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_flat_export() {
        let mut geometry = Geometry::new(20);
        let state = geometry.active_mut();
        state.set_origin_y(100);
        state.set_front_y(20);
        state.add_spot(12, 60);
        state.add_spot(30, 33);

        assert_eq!(
            to_string(&geometry, 2),
            "Spot,Rf,X,Y\n1,0.50,12,60\n2,0.84,30,33\n"
        );
    }

    #[test]
    fn test_undefined_rf_exports_empty_field() {
        let mut geometry = Geometry::new(20);
        geometry.active_mut().add_spot(5, 6);
        assert_eq!(to_string(&geometry, 3), "Spot,Rf,X,Y\n1,,5,6\n");
    }

    #[test]
    fn test_partitioned_export_numbers_per_plate() {
        let mut geometry = Geometry::new(20);
        geometry.add_plate(Rect::new(0, 0, 50, 100), 20);
        geometry.active_mut().add_spot(10, 10);
        geometry.active_mut().add_spot(20, 20);
        geometry.add_plate(Rect::new(60, 0, 50, 100), 20);
        let state = geometry.active_mut();
        state.set_origin_y(90);
        state.set_front_y(10);
        state.add_spot(70, 50);

        assert_eq!(
            to_string(&geometry, 1),
            "Plate,Spot,Rf,X,Y\n1,1,,10,10\n1,2,,20,20\n2,1,0.5,70,50\n"
        );
    }

    #[test]
    fn test_empty_geometry_exports_header_only() {
        assert_eq!(to_string(&Geometry::new(20), 2), "Spot,Rf,X,Y\n");
    }
}
